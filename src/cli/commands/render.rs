//! Render command implementation
//!
//! Regenerates the portfolio section and headline stats of the static
//! landing page from a portfolio CSV.

use super::shared::{CommandStats, apply_cli_overrides, load_configuration};
use crate::app::services::ingest::load_portfolio;
use crate::app::services::site_renderer::render_site;
use crate::cli::args::RenderArgs;
use crate::Result;
use colored::*;
use std::time::Instant;
use tracing::{info, warn};

/// Render command runner
pub async fn run_render(args: RenderArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    args.validate()?;
    let mut config = load_configuration(&args.common)?;
    apply_cli_overrides(&mut config, args.file.as_deref(), args.index_path.as_deref())?;

    let mapped = load_portfolio(&config.input.csv_path, &config).await?;
    if mapped.is_empty() {
        warn!("Rendering an empty portfolio");
    }

    let summary = render_site(&config, &mapped.entries, args.keep_order).await?;

    println!(
        "{} {} with {} rows ({} active, {} exits).",
        "Updated".green().bold(),
        config.render.index_path.display(),
        summary.entries_rendered,
        summary.stats.active,
        summary.stats.exits
    );

    let stats = CommandStats {
        entries_loaded: mapped.entry_count(),
        rows_skipped: mapped.stats.rows_skipped,
        files_written: 1,
        processing_time: start_time.elapsed(),
        ..CommandStats::default()
    };
    info!("Render completed in {}", stats.format_duration());

    Ok(stats)
}
