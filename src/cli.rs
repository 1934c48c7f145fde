use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::Config;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Only show errors
    Quiet,
    /// Show standard information
    #[default]
    Normal,
    /// Show a render summary and debug logging
    Verbose,
}

impl VerbosityLevel {
    pub fn from_config(config: &Config) -> Self {
        if config.output.quiet {
            VerbosityLevel::Quiet
        } else if config.output.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Default log filter directive for this verbosity
    pub fn log_filter(self) -> &'static str {
        match self {
            VerbosityLevel::Quiet => "error",
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "debug",
        }
    }
}

/// Generate an RSS 2.0 document from a feed description
#[derive(Parser, Debug, Clone)]
#[command(name = "rss-gen")]
#[command(about = "Generate an RSS 2.0 document from a TOML or JSON feed description")]
#[command(version)]
pub struct Cli {
    /// Feed description file (.toml or .json)
    #[arg(help = "Feed description file (.toml or .json)")]
    pub input: PathBuf,

    /// Write the document here instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Skip field validation
    #[arg(long = "no-validate", help = "Build the document without checking field names")]
    pub no_validate: bool,

    /// Configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Quiet mode",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.input.is_file() {
            return Err(format!("Input file does not exist: {}", self.input.display()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_cli_parsing() {
        let cli = Cli::try_parse_from(["rss-gen", "feed.toml"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("feed.toml"));
        assert!(!cli.no_validate);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["rss-gen", "feed.toml", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let cli = Cli::try_parse_from(["rss-gen", "/nonexistent/feed.toml"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_verbosity_from_config() {
        let mut config = Config::default();
        assert_eq!(VerbosityLevel::from_config(&config), VerbosityLevel::Normal);

        config.output.verbose = true;
        assert_eq!(VerbosityLevel::from_config(&config), VerbosityLevel::Verbose);
        assert_eq!(VerbosityLevel::Verbose.log_filter(), "debug");

        config.output.quiet = true;
        assert_eq!(VerbosityLevel::from_config(&config), VerbosityLevel::Quiet);
    }
}
