//! Row-to-entry mapping
//!
//! Turns tokenized rows into portfolio entries: indexed field lookup,
//! status canonicalisation, URL normalisation and name filtering.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::column_mapping::{ColumnAliases, ColumnMapping, PortfolioField};
use super::stats::{MappingResult, MappingStats};
use crate::app::models::PortfolioEntry;
use crate::app::services::csv_parser::Row;
use crate::app::services::status::normalise_status;
use crate::constants::DEFAULT_URL_SCHEME;

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid URL scheme pattern"));

/// Prefix `https://` unless the URL already has an http(s) scheme
pub fn normalise_url(url: &str) -> String {
    if URL_SCHEME.is_match(url) {
        url.to_string()
    } else {
        format!("{}{}", DEFAULT_URL_SCHEME, url)
    }
}

/// Map rows onto entries using the default alias table
pub fn map_rows_to_entries(rows: &[Row]) -> Vec<PortfolioEntry> {
    map_rows_with_aliases(rows, &ColumnAliases::default()).entries
}

/// Map rows onto entries with an explicit alias table
///
/// The first row is the header. Rows whose name is absent or blank are
/// skipped; everything else becomes an entry, in input order.
pub fn map_rows_with_aliases(rows: &[Row], aliases: &ColumnAliases) -> MappingResult {
    let Some((header, data_rows)) = rows.split_first() else {
        debug!("No rows to map");
        return MappingResult::default();
    };

    let mapping = ColumnMapping::analyze(header, aliases);
    let mut stats = MappingStats {
        has_header: true,
        data_rows: data_rows.len(),
        ..MappingStats::default()
    };

    let missing = mapping.missing_fields();
    if missing.contains(&PortfolioField::Name) {
        warn!("Header has no name column; no entries can be mapped");
    }
    if !missing.is_empty() {
        debug!("Header is missing columns: {:?}", missing);
    }
    stats.record_missing(&missing);

    let mut entries = Vec::with_capacity(data_rows.len());
    for (index, row) in data_rows.iter().enumerate() {
        match map_row(row, &mapping) {
            Some(entry) => entries.push(entry),
            None => {
                stats.rows_skipped += 1;
                // +2: one for the header, one for 1-based numbering
                debug!("Skipped row {}: no name", index + 2);
            }
        }
    }

    stats.entries_mapped = entries.len();
    debug!(
        "Mapped {} entries from {} data rows ({} skipped)",
        stats.entries_mapped, stats.data_rows, stats.rows_skipped
    );

    MappingResult { entries, stats }
}

fn map_row(row: &[String], mapping: &ColumnMapping) -> Option<PortfolioEntry> {
    let present = |field| {
        mapping
            .value(row, field)
            .filter(|value| !value.trim().is_empty())
    };

    let name = present(PortfolioField::Name)?;

    Some(PortfolioEntry {
        name: name.to_string(),
        industry: present(PortfolioField::Industry).map(str::to_string),
        status: normalise_status(mapping.value(row, PortfolioField::Status)),
        url: present(PortfolioField::Url).map(normalise_url),
        year: present(PortfolioField::Year).map(str::to_string),
    })
}
