//! Record mapping from parsed CSV rows to portfolio entries
//!
//! The first row is treated as the header. Each recognised field is located
//! once through an alias table, then every data row is turned into a
//! [`PortfolioEntry`](crate::app::models::PortfolioEntry) by indexed lookup.
//!
//! # Architecture
//!
//! - [`column_mapping`] - header analysis and the configurable alias table
//! - [`mapper`] - per-row mapping, URL normalisation and row filtering
//! - [`stats`] - mapping statistics and result structures
//!
//! Missing columns and short rows never fail; they simply produce absent
//! values. Rows without a name are skipped and counted.

pub mod column_mapping;
pub mod mapper;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnAliases, ColumnMapping, PortfolioField};
pub use mapper::{map_rows_to_entries, map_rows_with_aliases, normalise_url};
pub use stats::{MappingResult, MappingStats};
