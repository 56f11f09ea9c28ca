//! Mapping statistics and result structures
//!
//! An empty entry list is a successful outcome; these types carry enough
//! detail for callers to explain *why* nothing was mapped.

use super::column_mapping::PortfolioField;
use crate::app::models::PortfolioEntry;

/// Mapped entries with basic statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingResult {
    /// Entries in input row order
    pub entries: Vec<PortfolioEntry>,

    /// Mapping statistics
    pub stats: MappingStats,
}

impl MappingResult {
    /// Number of mapped entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// True when parsing succeeded but produced nothing to display
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Simple mapping statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct MappingStats {
    /// Whether a header row was present
    pub has_header: bool,

    /// Number of data rows after the header
    pub data_rows: usize,

    /// Number of entries produced
    pub entries_mapped: usize,

    /// Number of rows dropped for lacking a name
    pub rows_skipped: usize,

    /// Recognised fields absent from the header
    pub missing_columns: Vec<String>,
}

impl MappingStats {
    pub(crate) fn record_missing(&mut self, fields: &[PortfolioField]) {
        self.missing_columns = fields.iter().map(|f| f.to_string()).collect();
    }

    /// Percentage of data rows that became entries
    pub fn success_rate(&self) -> f64 {
        if self.data_rows == 0 {
            0.0
        } else {
            (self.entries_mapped as f64 / self.data_rows as f64) * 100.0
        }
    }
}
