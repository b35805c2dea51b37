use kick_tetris::core::{geometry, Board, Piece};
use kick_tetris::engine::{Engine, EngineConfig, PieceGenerator, Phase, TickOutcome};
use kick_tetris::types::{Cell, Command, PieceKind, Position};

fn engine_with(kinds: &[PieceKind]) -> Engine {
    Engine::with_sequence(EngineConfig::default(), kinds).unwrap()
}

#[test]
fn every_shape_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        for orientation in 0..geometry::rotation_count(kind) as i32 {
            let cells = Piece::new(kind, Position::new(10, 5), orientation).cells();
            for (i, a) in cells.iter().enumerate() {
                for b in &cells[i + 1..] {
                    assert_ne!(a, b, "{:?} orientation {}", kind, orientation);
                }
            }
        }
    }
}

#[test]
fn rotating_n_times_restores_cells() {
    for kind in PieceKind::ALL {
        let start = Piece::new(kind, Position::new(10, 5), 0);
        for clockwise in [true, false] {
            let mut piece = start;
            for _ in 0..geometry::rotation_count(kind) {
                piece = piece.rotated(clockwise);
            }
            assert_eq!(piece.cells(), start.cells(), "{:?}", kind);
        }
    }
}

#[test]
fn counter_clockwise_kick_off_the_left_wall_uses_negated_destination_row() {
    let mut engine = engine_with(&[PieceKind::T]);
    engine.tick();
    assert!(engine.rotate(true));
    for _ in 0..5 {
        assert!(engine.move_down());
    }
    while engine.move_left() {}
    // Orientation 1 hugs the wall: cells sit in cols 0 and 1.
    let upright = engine.active().unwrap();
    assert_eq!((upright.orientation(), upright.origin()), (1, Position::new(16, 0)));

    // Back to 0 would poke into col -1. The destination row is kick row 0,
    // (0,0) (0,-1) (1,-1) (0,-2) (-2,-1); negated, its second entry (0,1)
    // pushes the piece off the wall.
    assert!(engine.rotate(false));
    let flat = engine.active().unwrap();
    assert_eq!(flat.orientation(), 0);
    assert_eq!(flat.origin(), Position::new(16, 1));
    assert!(flat.cells().iter().all(|c| c.col >= 0));
}

#[test]
fn is_valid_checks_bounds_and_settled_cells() {
    let mut board = Board::new(23, 10);
    board.set(Position::new(5, 5), Cell::Filled(PieceKind::Z));
    let engine =
        Engine::from_board(EngineConfig::default(), PieceGenerator::default(), board).unwrap();

    // O occupies origin, +col, +row, +row+col.
    assert!(engine.is_valid(&Piece::new(PieceKind::O, Position::new(0, 0), 0)));
    assert!(engine.is_valid(&Piece::new(PieceKind::O, Position::new(21, 8), 0)));
    assert!(!engine.is_valid(&Piece::new(PieceKind::O, Position::new(-1, 0), 0)));
    assert!(!engine.is_valid(&Piece::new(PieceKind::O, Position::new(0, -1), 0)));
    assert!(!engine.is_valid(&Piece::new(PieceKind::O, Position::new(22, 0), 0)));
    assert!(!engine.is_valid(&Piece::new(PieceKind::O, Position::new(0, 9), 0)));
    assert!(!engine.is_valid(&Piece::new(PieceKind::O, Position::new(4, 4), 0)));
    assert!(engine.is_valid(&Piece::new(PieceKind::O, Position::new(3, 4), 0)));
}

#[test]
fn clearing_row_three_shifts_rows_above_down() {
    let mut board = Board::new(23, 10);
    board.fill_row(3, Cell::Filled(PieceKind::I));
    // Markers below and above the full row.
    board.set(Position::new(1, 2), Cell::Filled(PieceKind::T));
    board.set(Position::new(4, 0), Cell::Filled(PieceKind::S));
    board.set(Position::new(7, 9), Cell::Filled(PieceKind::L));
    board.set(Position::new(22, 5), Cell::Filled(PieceKind::J));

    assert!(board.clear_full_lines());

    assert_eq!(board.get(Position::new(1, 2)), Some(Cell::Filled(PieceKind::T)));
    assert_eq!(board.get(Position::new(3, 0)), Some(Cell::Filled(PieceKind::S)));
    assert_eq!(board.get(Position::new(6, 9)), Some(Cell::Filled(PieceKind::L)));
    assert_eq!(board.get(Position::new(21, 5)), Some(Cell::Filled(PieceKind::J)));
    assert!(board.row(22).iter().all(Cell::is_empty));
    assert_eq!(board.filled_count(), 4);
    assert!(!board.clear_full_lines());
}

#[test]
fn snapshot_is_stable_without_mutation() {
    let mut engine = engine_with(&[PieceKind::T]);
    engine.tick();
    engine.move_left();
    assert_eq!(engine.snapshot(), engine.snapshot());
}

#[test]
fn shadow_is_read_only_and_matches_landed_piece() {
    let mut engine = engine_with(&[PieceKind::L]);
    engine.tick();
    let before = engine.snapshot();
    let shadow = engine.shadow().unwrap();
    assert_eq!(engine.snapshot(), before);
    assert_eq!(shadow.cells().iter().map(|p| p.row).min(), Some(0));

    engine.hard_drop();
    assert_eq!(engine.shadow(), engine.active());
}

#[test]
fn blocked_spawn_ends_the_game_for_good() {
    let mut board = Board::new(23, 10);
    for row in 19..23 {
        for col in 0..10 {
            if col != 9 {
                board.set(Position::new(row, col), Cell::Filled(PieceKind::Z));
            }
        }
    }
    let mut engine = Engine::from_board(
        EngineConfig::default(),
        PieceGenerator::scripted(&[PieceKind::T]).unwrap(),
        board,
    )
    .unwrap();

    assert_eq!(engine.tick(), TickOutcome::GameOver);
    assert!(engine.is_game_over());
    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(engine.active(), None);

    let frozen = engine.snapshot();
    assert!(frozen.game_over);
    assert_eq!(engine.tick(), TickOutcome::Halted);
    assert!(!engine.move_left());
    assert!(!engine.move_right());
    assert!(!engine.move_down());
    assert!(!engine.rotate(true));
    assert!(!engine.rotate(false));
    assert_eq!(engine.hard_drop(), 0);
    for command in [Command::MoveLeft, Command::RotateCcw, Command::HardDrop] {
        assert!(!engine.apply(command));
    }
    assert_eq!(engine.snapshot(), frozen);
}

#[test]
fn o_piece_falls_twenty_one_rows_then_settles_on_the_floor() {
    let mut engine = engine_with(&[PieceKind::O]);
    assert_eq!(engine.tick(), TickOutcome::Spawned(PieceKind::O));

    let mut moves = 0;
    while engine.move_down() {
        moves += 1;
    }
    assert_eq!(moves, 21);

    assert_eq!(engine.tick(), TickOutcome::Placed);
    assert_eq!(engine.active(), None);
    for pos in [(0, 4), (0, 5), (1, 4), (1, 5)] {
        let pos = Position::new(pos.0, pos.1);
        assert_eq!(engine.board().get(pos), Some(Cell::Filled(PieceKind::O)));
    }
    assert_eq!(engine.board().filled_count(), 4);
}

#[test]
fn completed_row_clears_on_the_tick_after_placement() {
    let mut board = Board::new(23, 10);
    for col in (0..10).filter(|c| !(4..=5).contains(c)) {
        board.set(Position::new(0, col), Cell::Filled(PieceKind::J));
    }
    let mut engine = Engine::from_board(
        EngineConfig::default(),
        PieceGenerator::scripted(&[PieceKind::O]).unwrap(),
        board,
    )
    .unwrap();

    engine.tick();
    assert_eq!(engine.hard_drop(), 21);
    assert_eq!(engine.tick(), TickOutcome::Placed);
    assert!(engine.board().is_row_full(0));

    assert_eq!(engine.tick(), TickOutcome::LinesCleared(1));
    assert_eq!(engine.active(), None);
    // The top half of the O drops into row 0.
    assert_eq!(engine.board().filled_count(), 2);
    assert_eq!(engine.board().get(Position::new(0, 4)), Some(Cell::Filled(PieceKind::O)));
    assert_eq!(engine.board().get(Position::new(0, 5)), Some(Cell::Filled(PieceKind::O)));

    assert_eq!(engine.tick(), TickOutcome::Spawned(PieceKind::O));
}

#[test]
fn gravity_runs_the_full_tick_cycle() {
    let mut engine = engine_with(&[PieceKind::O]);
    let mut outcomes = Vec::new();
    for _ in 0..24 {
        outcomes.push(engine.tick());
    }
    assert_eq!(outcomes[0], TickOutcome::Spawned(PieceKind::O));
    assert!(outcomes[1..22].iter().all(|o| *o == TickOutcome::Fell));
    assert_eq!(outcomes[22], TickOutcome::Placed);
    assert_eq!(outcomes[23], TickOutcome::Spawned(PieceKind::O));
}
