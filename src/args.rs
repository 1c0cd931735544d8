use std::path::PathBuf;

use clap::Parser;

use crate::{
    dataset::OutputFormat,
    model::{
        constants::{DEFAULT_BASE_K, DEFAULT_DECAY_PER_365D, DEFAULT_GS_BONUS_K, DEFAULT_SEED_ELO},
        structures::elo_config::EloConfig
    }
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Grand Slam Elo Processor",
    long_about = "Replays historical Grand Slam matches in chronological order and emits an Elo \
    timeseries with pre- and post-match ratings for every match"
)]
pub struct Args {
    /// Match records, as a JSON array or JSON lines. Player keys must already be
    /// normalized so that one competitor always has the same key.
    #[arg(short, long, env = "ELO_INPUT", help = "Path to the match records")]
    pub input: PathBuf,

    /// Destination of the rating timeseries (one record per match)
    #[arg(short, long, env = "ELO_OUTPUT", default_value = "out/elo_timeseries.json")]
    pub output: PathBuf,

    /// Optional destination of the final leaderboard
    #[arg(short, long, env = "ELO_RATINGS_OUTPUT")]
    pub ratings_output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, help = "Output file format")]
    pub format: OutputFormat,

    /// Only process matches from this tournament level (Sackmann uses "G" for Grand Slams).
    /// When unset, every record in the input is processed.
    #[arg(short, long, env = "ELO_TOURNEY_LEVEL")]
    pub tourney_level: Option<String>,

    #[arg(long, env = "ELO_SEED", default_value_t = DEFAULT_SEED_ELO, help = "Initial Elo for unseen players")]
    pub seed_elo: f64,

    #[arg(long, env = "ELO_BASE_K", default_value_t = DEFAULT_BASE_K, help = "Base K-factor")]
    pub base_k: f64,

    #[arg(
        long,
        env = "ELO_GS_BONUS_K",
        default_value_t = DEFAULT_GS_BONUS_K,
        help = "Extra K per round-weight unit for later rounds"
    )]
    pub gs_bonus_k: f64,

    #[arg(
        long,
        env = "ELO_DECAY_PER_365D",
        default_value_t = DEFAULT_DECAY_PER_365D,
        help = "Passive decay per 365 idle days, in Elo points"
    )]
    pub decay_per_365d: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    pub fn elo_config(&self) -> EloConfig {
        EloConfig {
            seed_elo: self.seed_elo,
            base_k: self.base_k,
            gs_bonus_k: self.gs_bonus_k,
            decay_per_365d: self.decay_per_365d
        }
    }
}
