use kick_tetris::core::Board;
use kick_tetris::engine::{Engine, EngineConfig, PieceGenerator, Snapshot};
use kick_tetris::term::{piece_color, shadow_color, GameView, HostStatus, Viewport};
use kick_tetris::types::{Cell, PieceKind, Position};

fn screen_text(fb: &kick_tetris::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.line(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Engine::default().snapshot();
    let view = GameView::default();

    // 10 cols * 2 + border = 22 wide, 23 rows + border = 25 tall.
    let fb = view.render(&snap, HostStatus::default(), Viewport::new(22, 25));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 24).unwrap().ch, '└');
    assert_eq!(fb.get(21, 24).unwrap().ch, '┘');
}

#[test]
fn row_zero_is_drawn_at_the_bottom_two_chars_wide() {
    let mut board = Board::new(23, 10);
    board.set(Position::new(0, 0), Cell::Filled(PieceKind::T));
    let engine =
        Engine::from_board(EngineConfig::default(), PieceGenerator::default(), board).unwrap();

    let fb = GameView::default().render(
        &engine.snapshot(),
        HostStatus::default(),
        Viewport::new(22, 25),
    );

    let (x0, y0) = (1, 23);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::T));
    }
    assert_ne!(fb.get(x0, 1).unwrap().ch, '█');
}

#[test]
fn active_piece_and_dimmed_shadow_are_drawn() {
    let mut engine = Engine::with_sequence(EngineConfig::default(), &[PieceKind::I]).unwrap();
    engine.tick();
    let fb = GameView::default().render(
        &engine.snapshot(),
        HostStatus::default(),
        Viewport::new(22, 25),
    );

    // I spawns flat on the top row covering cols 3..=6.
    let top = fb.get(1 + 3 * 2, 1).unwrap();
    assert_eq!(top.ch, '█');
    assert_eq!(top.style.fg, piece_color(PieceKind::I));

    let shadow = fb.get(1 + 3 * 2, 23).unwrap();
    assert_eq!(shadow.ch, '▒');
    assert_eq!(shadow.style.fg, shadow_color(PieceKind::I));
    assert_ne!(shadow_color(PieceKind::I), piece_color(PieceKind::I));
}

#[test]
fn overlays_show_pause_and_game_over() {
    let view = GameView::default();
    let vp = Viewport::new(22, 25);

    let snap = Engine::default().snapshot();
    let paused = view.render(&snap, HostStatus { paused: true }, vp);
    assert!(screen_text(&paused).contains("PAUSED"));

    let over = Snapshot {
        game_over: true,
        ..snap
    };
    let text = screen_text(&view.render(&over, HostStatus { paused: true }, vp));
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn side_panel_lists_controls_when_wide_enough() {
    let mut engine = Engine::with_sequence(EngineConfig::default(), &[PieceKind::S]).unwrap();
    engine.tick();
    let view = GameView::default();

    let narrow = screen_text(&view.render(&engine.snapshot(), HostStatus::default(), Viewport::new(22, 25)));
    assert!(!narrow.contains("KEYS"));

    let wide = screen_text(&view.render(&engine.snapshot(), HostStatus::default(), Viewport::new(60, 25)));
    assert!(wide.contains("KEYS"));
    assert!(wide.contains("running"));
    assert!(wide.contains("rotate ccw"));
}

#[test]
fn board_cell_at_maps_screen_to_rows_from_the_bottom() {
    let view = GameView::default();
    let vp = Viewport::new(22, 25);
    assert_eq!(view.board_cell_at(23, 10, vp, 1, 23), Some((0, 0)));
    assert_eq!(view.board_cell_at(23, 10, vp, 20, 1), Some((22, 9)));
    assert_eq!(view.board_cell_at(23, 10, vp, 0, 0), None);
    assert_eq!(view.board_cell_at(23, 10, vp, 21, 5), None);
}
