//! Check command implementation
//!
//! Runs every mapped CSV entry through the admin input rules, so a CSV can
//! be vetted before its rows are imported into the database.

use super::shared::{CommandStats, apply_cli_overrides, load_configuration};
use crate::app::models::PortfolioEntry;
use crate::app::services::ingest::load_portfolio;
use crate::app::services::validation::validate_input;
use crate::cli::args::CheckArgs;
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Collect validation issues, prefixed with the entry position and name
pub fn collect_issues(entries: &[PortfolioEntry]) -> Vec<String> {
    let mut issues = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match validate_input(&entry.to_input()) {
            Ok(payload) => debug!("Entry {} ok: {:?}", index + 1, payload.into_db_row()),
            Err(Error::InvalidInput { issues: found }) => {
                issues.extend(
                    found
                        .into_iter()
                        .map(|issue| format!("entry {} ({}): {}", index + 1, entry.name, issue)),
                );
            }
            Err(e) => issues.push(format!("entry {} ({}): {}", index + 1, entry.name, e)),
        }
    }

    issues
}

/// Check command runner
pub async fn run_check(args: CheckArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    let mut config = load_configuration(&args.common)?;
    apply_cli_overrides(&mut config, args.file.as_deref(), None)?;

    let mapped = load_portfolio(&config.input.csv_path, &config).await?;
    let issues = collect_issues(&mapped.entries);

    info!(
        "Checked {} entries in {:.2}s",
        mapped.entry_count(),
        start_time.elapsed().as_secs_f64()
    );

    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("  {} {}", "✗".red(), issue);
        }
        return Err(Error::invalid_input(issues));
    }

    println!(
        "{} {} entries passed ({} rows skipped)",
        "✓".green(),
        mapped.entry_count(),
        mapped.stats.rows_skipped
    );

    Ok(CommandStats {
        entries_loaded: mapped.entry_count(),
        rows_skipped: mapped.stats.rows_skipped,
        processing_time: start_time.elapsed(),
        ..CommandStats::default()
    })
}
