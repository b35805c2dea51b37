//! Command-line options for the terminal runner.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::engine::{Engine, EngineConfig, KickPolicy};
use crate::types::PieceKind;

pub const USAGE: &str = "usage: kick-tetris [--rows N] [--cols N] [--tick-ms N] [--seed N] \
[--kick-policy first|last] [--sequence IJLOSTZ] [--log-file PATH]";

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub config: EngineConfig,
    /// Fixed spawn order instead of random pieces.
    pub sequence: Option<Vec<PieceKind>>,
    pub log_file: Option<PathBuf>,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            sequence: None,
            log_file: None,
            help: false,
        }
    }
}

impl CliOptions {
    /// Build a fresh engine from these options. Called again on restart.
    pub fn build_engine(&self) -> Result<Engine> {
        let engine = match &self.sequence {
            Some(kinds) => Engine::with_sequence(self.config, kinds),
            None => Engine::with_config(self.config),
        };
        engine.context("invalid engine configuration")
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut opts = CliOptions::default();
    let mut rows = opts.config.rows;
    let mut cols = opts.config.cols;

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .map(String::as_str)
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match flag {
            "-h" | "--help" => opts.help = true,
            "--rows" => rows = parse_number(flag, value()?)?,
            "--cols" => cols = parse_number(flag, value()?)?,
            "--tick-ms" => {
                let ms: u64 = parse_number(flag, value()?)?;
                opts.config = opts.config.with_tick_interval(Duration::from_millis(ms));
            }
            "--seed" => {
                let seed: u32 = parse_number(flag, value()?)?;
                opts.config = opts.config.with_seed(seed);
            }
            "--kick-policy" => {
                let v = value()?;
                let policy = KickPolicy::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --kick-policy value: {} (first|last)", v))?;
                opts.config = opts.config.with_kick_policy(policy);
            }
            "--sequence" => opts.sequence = Some(parse_sequence(value()?)?),
            "--log-file" => opts.log_file = Some(PathBuf::from(value()?)),
            other => return Err(anyhow!("unknown argument: {}\n{}", other, USAGE)),
        }
        i += 1;
    }

    opts.config = opts.config.with_dimensions(rows, cols);
    opts.config.validate()?;
    Ok(opts)
}

fn parse_number<T: std::str::FromStr>(flag: &str, v: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

/// Letters such as `IOT` or `i,o,t`; separators are ignored.
fn parse_sequence(v: &str) -> Result<Vec<PieceKind>> {
    let kinds = v
        .chars()
        .filter(|c| !matches!(c, ',' | ' '))
        .map(|c| PieceKind::from_char(c).ok_or_else(|| anyhow!("invalid piece in --sequence: {}", c)))
        .collect::<Result<Vec<_>>>()?;
    if kinds.is_empty() {
        return Err(anyhow!("--sequence needs at least one piece"));
    }
    Ok(kinds)
}
