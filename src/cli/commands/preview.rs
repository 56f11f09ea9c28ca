//! Preview command implementation
//!
//! Parses a portfolio CSV and lists the mapped entries, followed by the
//! same feedback line the site shows after an upload.

use super::shared::{
    CommandStats, apply_cli_overrides, csv_escape, display_name, load_configuration,
    print_feedback,
};
use crate::app::models::PortfolioEntry;
use crate::app::services::ingest::{Feedback, load_portfolio};
use crate::app::services::portfolio_stats::sort_portfolio;
use crate::app::services::record_mapper::MappingStats;
use crate::cli::args::{OutputFormat, PreviewArgs};
use crate::constants::EMPTY_FIELD_PLACEHOLDER;
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Preview command runner
pub async fn run_preview(args: PreviewArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    let mut config = load_configuration(&args.common)?;
    apply_cli_overrides(&mut config, args.file.as_deref(), None)?;
    debug!("Preview arguments: {:?}", args);

    let path = config.input.csv_path.clone();
    let result = load_portfolio(&path, &config).await;

    let feedback = match &args.file {
        Some(_) => Some(Feedback::for_upload(&result, &display_name(&path))),
        None => Feedback::for_default(&result),
    };

    let mapped = match result {
        Ok(mapped) => mapped,
        Err(e) => {
            if let Some(feedback) = &feedback {
                print_feedback(feedback);
            }
            return Err(e);
        }
    };

    let entries = if args.sort {
        sort_portfolio(&mapped.entries)
    } else {
        mapped.entries.clone()
    };

    match args.output_format {
        OutputFormat::Human => print_human(&entries, &mapped.stats),
        OutputFormat::Json => print_json(&entries, &mapped.stats)?,
        OutputFormat::Csv => print!("{}", entries_to_csv(&entries)),
    }

    if let Some(feedback) = &feedback {
        print_feedback(feedback);
    }

    let stats = CommandStats {
        entries_loaded: mapped.entry_count(),
        rows_skipped: mapped.stats.rows_skipped,
        processing_time: start_time.elapsed(),
        ..CommandStats::default()
    };
    info!("Preview completed in {}", stats.format_duration());

    Ok(stats)
}

fn print_human(entries: &[PortfolioEntry], stats: &MappingStats) {
    for entry in entries {
        let status = match entry.status.sort_rank() {
            0 => entry.status.as_str().green(),
            1 => entry.status.as_str().blue(),
            _ => entry.status.as_str().dimmed(),
        };

        println!(
            "{:<32} {:<10} {:<6} {:<20} {}",
            entry.name.bold(),
            status,
            entry.year.as_deref().unwrap_or(EMPTY_FIELD_PLACEHOLDER),
            entry.industry.as_deref().unwrap_or(EMPTY_FIELD_PLACEHOLDER),
            entry.url.as_deref().unwrap_or("")
        );
    }

    if stats.rows_skipped > 0 {
        println!(
            "{}",
            format!("{} rows skipped (no name)", stats.rows_skipped).yellow()
        );
    }
    if !stats.missing_columns.is_empty() {
        println!(
            "{}",
            format!("Missing columns: {}", stats.missing_columns.join(", ")).dimmed()
        );
    }
}

fn print_json(entries: &[PortfolioEntry], stats: &MappingStats) -> Result<()> {
    let report = serde_json::json!({
        "entries": entries,
        "stats": stats,
    });

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::serialization("Failed to serialize preview", e))?;
    println!("{}", json);
    Ok(())
}

/// Entries as CSV with the legacy column layout
pub fn entries_to_csv(entries: &[PortfolioEntry]) -> String {
    let mut csv = String::from("name,industry,status,url,year\n");
    for entry in entries {
        let cells = [
            csv_escape(&entry.name),
            csv_escape(entry.industry.as_deref().unwrap_or("")),
            csv_escape(entry.status.as_str()),
            csv_escape(entry.url.as_deref().unwrap_or("")),
            csv_escape(entry.year.as_deref().unwrap_or("")),
        ];
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }
    csv
}
