//! Shared components for CLI commands
//!
//! Common types, logging setup, configuration loading and output helpers
//! used by every subcommand.

use crate::app::services::ingest::{Feedback, Tone};
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::Result;
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Command statistics for the closing summary line
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Entries mapped from the input
    pub entries_loaded: usize,
    /// Data rows dropped for lacking a name
    pub rows_skipped: usize,
    /// Validation issues reported
    pub issues_found: usize,
    /// Whether an output file was rewritten
    pub files_written: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl CommandStats {
    /// Format the processing time for humans
    pub fn format_duration(&self) -> String {
        let secs = self.processing_time.as_secs_f64();
        if secs < 1.0 {
            format!("{:.0}ms", secs * 1000.0)
        } else {
            format!("{:.2}s", secs)
        }
    }
}

/// Set up structured logging
///
/// `-v`/`-q` win over the configured level; `RUST_LOG` wins over both.
pub fn setup_logging(args: &CommonArgs, config: &Config) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if args.uses_default_level() {
        config.logging.level.as_str()
    } else {
        args.get_log_level()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portfolio_ingest={}", log_level)));

    let initialised = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialised.is_err() {
        debug!("Logging already initialised");
    } else {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Resolve which config file to use: explicit flag, else the default location if present
pub fn resolve_config_file(args: &CommonArgs) -> Option<PathBuf> {
    match &args.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    }
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    args.validate()?;

    let config_file = resolve_config_file(args);
    let config = Config::load_layered(config_file.as_deref())?;

    // The config file can set the level, so logging starts once it is loaded
    setup_logging(args, &config);
    match &config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(
    config: &mut Config,
    input: Option<&Path>,
    index: Option<&Path>,
) -> Result<()> {
    if let Some(input) = input {
        config.input.csv_path = input.to_path_buf();
    }
    if let Some(index) = index {
        config.render.index_path = index.to_path_buf();
    }
    config.validate()
}

/// Display name of an input file for feedback messages
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print a feedback line to stderr, coloured by tone
pub fn print_feedback(feedback: &Feedback) {
    let message = match feedback.tone {
        Tone::Info => feedback.message.cyan(),
        Tone::Success => feedback.message.green(),
        Tone::Warning => feedback.message.yellow(),
        Tone::Error => feedback.message.red().bold(),
    };
    eprintln!("{}", message);
}

/// Quote a CSV cell when needed
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
