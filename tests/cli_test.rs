use std::path::PathBuf;
use std::time::Duration;

use kick_tetris::cli::parse_args;
use kick_tetris::engine::{KickPolicy, TickOutcome};
use kick_tetris::types::PieceKind;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_arguments_gives_defaults() {
    let opts = parse_args(&[]).unwrap();
    assert_eq!(opts.config.rows, 23);
    assert_eq!(opts.config.cols, 10);
    assert_eq!(opts.config.kick_policy, KickPolicy::FirstValid);
    assert_eq!(opts.sequence, None);
    assert_eq!(opts.log_file, None);
    assert!(!opts.help);
}

#[test]
fn all_options_are_parsed() {
    let opts = parse_args(&args(&[
        "--rows", "12", "--cols", "6", "--tick-ms", "250", "--seed", "42", "--kick-policy",
        "last", "--sequence", "i,O,t", "--log-file", "/tmp/kick.log",
    ]))
    .unwrap();

    assert_eq!((opts.config.rows, opts.config.cols), (12, 6));
    assert_eq!(opts.config.tick_interval, Duration::from_millis(250));
    assert_eq!(opts.config.seed, 42);
    assert_eq!(opts.config.kick_policy, KickPolicy::LastValid);
    assert_eq!(
        opts.sequence,
        Some(vec![PieceKind::I, PieceKind::O, PieceKind::T])
    );
    assert_eq!(opts.log_file, Some(PathBuf::from("/tmp/kick.log")));

    let mut engine = opts.build_engine().unwrap();
    assert_eq!(engine.rows(), 12);
    assert_eq!(engine.tick(), TickOutcome::Spawned(PieceKind::I));
}

#[test]
fn bad_arguments_are_rejected() {
    for bad in [
        &["--rows"][..],
        &["--rows", "0"],
        &["--cols", "abc"],
        &["--tick-ms", "0"],
        &["--kick-policy", "middle"],
        &["--sequence", "IQ"],
        &["--sequence", ","],
        &["--frobnicate"],
    ] {
        assert!(parse_args(&args(bad)).is_err(), "{:?}", bad);
    }
}

#[test]
fn help_flag_is_reported() {
    assert!(parse_args(&args(&["-h"])).unwrap().help);
}
