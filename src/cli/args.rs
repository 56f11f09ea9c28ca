//! Command-line argument definitions for portfolio-ingest
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the portfolio ingestion tool
///
/// Parses portfolio CSV exports, normalises their status vocabulary and
/// regenerates the static portfolio page.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "portfolio-ingest",
    version,
    about = "Parse, normalise and render portfolio company listings from CSV exports",
    long_about = "Reads a portfolio CSV (legacy status/url columns or the database export's \
                  tag/website columns), normalises each row into a portfolio entry, and can \
                  preview, summarise, validate or render the entries into the static landing page."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a CSV and list the resulting entries
    Preview(PreviewArgs),
    /// Show active company and exit counts
    Stats(StatsArgs),
    /// Regenerate the portfolio section of the static page
    Render(RenderArgs),
    /// Check every entry against the admin input rules
    Check(CheckArgs),
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/portfolio-ingest/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// True when no verbosity flag was given, so the config file level applies
    pub fn uses_default_level(&self) -> bool {
        !self.quiet && self.verbose == 0
    }

    /// Validate shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }
}

/// Arguments for the preview command
#[derive(Debug, Clone, Parser)]
pub struct PreviewArgs {
    /// Portfolio CSV to read
    ///
    /// If not specified, reads the configured default CSV (data/portfolio.csv).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Show entries in display order instead of file order
    #[arg(long = "sort", help = "Show entries in display order")]
    pub sort: bool,

    /// Output format for the entry listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the entry listing"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Portfolio CSV, or a JSON array of database rows (`.json`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format for the counts
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the counts"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl StatsArgs {
    /// True when the input should be read as a database export
    pub fn is_json_input(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

/// Arguments for the render command
#[derive(Debug, Clone, Parser)]
pub struct RenderArgs {
    /// Portfolio CSV to render
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Static page to update in place
    #[arg(
        long = "index",
        value_name = "PATH",
        help = "Static page to update (defaults to index.html)"
    )]
    pub index_path: Option<PathBuf>,

    /// Render entries in file order instead of display order
    #[arg(long = "keep-order", help = "Render entries in file order")]
    pub keep_order: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl RenderArgs {
    /// Validate the render command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;

        if let Some(index_path) = &self.index_path {
            if index_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Index path is a directory: {}",
                    index_path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Portfolio CSV to check
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Commands {
    /// Shared flags of whichever subcommand was chosen
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Preview(args) => &args.common,
            Commands::Stats(args) => &args.common,
            Commands::Render(args) => &args.common,
            Commands::Check(args) => &args.common,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Result<Commands> {
        self.command
            .clone()
            .ok_or_else(|| Error::configuration("No command specified"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_preview_defaults() {
        let args = Args::try_parse_from(["portfolio-ingest", "preview"]).unwrap();
        match args.get_command().unwrap() {
            Commands::Preview(preview) => {
                assert!(preview.file.is_none());
                assert!(!preview.sort);
                assert_eq!(preview.output_format, OutputFormat::Human);
                assert_eq!(preview.common.get_log_level(), "warn");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_preview_with_options() {
        let args = Args::try_parse_from([
            "portfolio-ingest",
            "preview",
            "upload.csv",
            "--sort",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        let Some(Commands::Preview(preview)) = args.command else {
            panic!("expected preview");
        };
        assert_eq!(preview.file, Some(PathBuf::from("upload.csv")));
        assert!(preview.sort);
        assert_eq!(preview.output_format, OutputFormat::Json);
        assert_eq!(preview.common.get_log_level(), "debug");
    }

    #[test]
    fn test_render_options() {
        let args = Args::try_parse_from([
            "portfolio-ingest",
            "render",
            "--index",
            "public/index.html",
            "--keep-order",
            "-q",
        ])
        .unwrap();

        let Some(Commands::Render(render)) = args.command else {
            panic!("expected render");
        };
        assert_eq!(render.index_path, Some(PathBuf::from("public/index.html")));
        assert!(render.keep_order);
        assert_eq!(render.common.get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["portfolio-ingest", "check", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_levels() {
        let mut common = CommonArgs::default();
        assert!(common.uses_default_level());
        for (count, level) in [(1, "info"), (2, "debug"), (3, "trace"), (7, "trace")] {
            common.verbose = count;
            assert_eq!(common.get_log_level(), level);
        }
        assert!(!common.uses_default_level());
    }

    #[test]
    fn test_missing_config_file_fails_validation() {
        let common = CommonArgs {
            config_file: Some(PathBuf::from("/nonexistent/config.toml")),
            ..CommonArgs::default()
        };
        assert!(common.validate().is_err());
    }

    #[test]
    fn test_json_input_detection() {
        assert!(StatsArgs::is_json_input(Path::new("export.json")));
        assert!(StatsArgs::is_json_input(Path::new("EXPORT.JSON")));
        assert!(!StatsArgs::is_json_input(Path::new("portfolio.csv")));
        assert!(!StatsArgs::is_json_input(Path::new("json")));
    }

    #[test]
    fn test_no_command() {
        let args = Args::try_parse_from(["portfolio-ingest"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.get_command().is_err());
    }
}
