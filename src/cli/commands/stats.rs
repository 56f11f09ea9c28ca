//! Stats command implementation
//!
//! Prints the active-company and exit counts shown on the landing page, from
//! either a portfolio CSV or a JSON export of the database table.

use super::shared::{CommandStats, apply_cli_overrides, load_configuration};
use crate::app::services::ingest::{load_company_export, load_portfolio};
use crate::app::services::portfolio_stats::{PortfolioStats, calculate_stats};
use crate::cli::args::{OutputFormat, StatsArgs};
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

/// Stats command runner
pub async fn run_stats(args: StatsArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    let mut config = load_configuration(&args.common)?;
    apply_cli_overrides(&mut config, args.file.as_deref(), None)?;

    let path = config.input.csv_path.clone();
    let (stats, records) = if StatsArgs::is_json_input(&path) {
        let companies = load_company_export(&path).await?;
        (calculate_stats(&companies), companies.len())
    } else {
        let mapped = load_portfolio(&path, &config).await?;
        (calculate_stats(&mapped.entries), mapped.entry_count())
    };

    match args.output_format {
        OutputFormat::Human => {
            println!("{} {}", "Active companies:".bold(), stats.active);
            println!("{} {}", "Exits:".bold(), stats.exits);
            println!("{}", format!("({} records)", records).dimmed());
        }
        OutputFormat::Json => print_json(&stats, records)?,
        OutputFormat::Csv => {
            println!("metric,value");
            println!("active,{}", stats.active);
            println!("exits,{}", stats.exits);
            println!("records,{}", records);
        }
    }

    let command_stats = CommandStats {
        entries_loaded: records,
        processing_time: start_time.elapsed(),
        ..CommandStats::default()
    };
    info!("Stats completed in {}", command_stats.format_duration());

    Ok(command_stats)
}

fn print_json(stats: &PortfolioStats, records: usize) -> Result<()> {
    let report = serde_json::json!({
        "active": stats.active,
        "exits": stats.exits,
        "records": records,
    });
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::serialization("Failed to serialize stats", e))?;
    println!("{}", json);
    Ok(())
}
