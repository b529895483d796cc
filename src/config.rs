//! Command-line configuration for the terminal host.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::types::DEFAULT_TICK_MS;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    #[arg(long, value_name = "SEED", help = "Fixed seed for the piece sequence (random if omitted)")]
    pub seed: Option<u32>,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Milliseconds between gravity ticks"
    )]
    pub tick_ms: u32,

    #[arg(long, value_name = "FILE", help = "Write logs to this file (logging is off otherwise)")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = parse_level,
        help = "off, error, warn, info, debug or trace"
    )]
    pub log_level: LevelFilter,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level `{s}`"))
}

impl Config {
    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: DEFAULT_TICK_MS,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}
