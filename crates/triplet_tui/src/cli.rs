//! Command-line interface for triplet.

use clap::Parser;
use std::path::PathBuf;

/// Triplet - two players, one terminal, three in a row
#[derive(Parser, Debug)]
#[command(name = "triplet")]
#[command(about = "Two-player match-three on a 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (TOML). Defaults to ./triplet.toml when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file, overriding the config.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Load config and assets, report, and exit without opening the terminal.
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["triplet", "--config", "my.toml", "--check"]);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(cli.check);
        assert_eq!(cli.log_file, None);
    }
}
