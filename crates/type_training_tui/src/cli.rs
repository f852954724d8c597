//! Command-line interface for the Type Training terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Type Training - pick the type that wins (or loses) against your rival
#[derive(Parser, Debug)]
#[command(name = "type-training")]
#[command(about = "Pick the type that wins (or loses) against your rival", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for reproducible challenge rolls
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["type-training"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_seed_and_log_file() {
        let cli =
            Cli::try_parse_from(["type-training", "--seed", "7", "--log-file", "play.log"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log_file, Some(PathBuf::from("play.log")));
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["type-training", "--seed", "abc"]).is_err());
    }
}
