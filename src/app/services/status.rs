//! Status vocabulary normalisation
//!
//! The single place where free-form status text is canonicalised. Both the
//! CSV ingestion path and the stats/sort path go through [`normalise_status`]
//! so that `Invested`/`Exited`/`RIP` grouping is consistent everywhere.

use crate::app::models::PortfolioStatus;
use crate::constants::{RIP_SYNONYMS, status_labels};

/// Canonicalise a raw status value
///
/// - absent, empty or whitespace-only → `Unknown`
/// - `invested` / `exited` (any case, surrounding whitespace ignored) → canonical label
/// - `rip`, `inactive`, `closed` → `RIP`
/// - anything else → the trimmed original, case preserved
pub fn normalise_status(raw: Option<&str>) -> PortfolioStatus {
    let trimmed = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return PortfolioStatus::Unknown,
    };

    let cleaned = trimmed.to_lowercase();
    match cleaned.as_str() {
        "invested" => PortfolioStatus::Invested,
        "exited" => PortfolioStatus::Exited,
        value if RIP_SYNONYMS.contains(&value) => PortfolioStatus::Rip,
        // Same label as the Unknown variant, so keep them equal
        _ if trimmed == status_labels::UNKNOWN => PortfolioStatus::Unknown,
        _ => PortfolioStatus::Other(trimmed.to_string()),
    }
}
