//! Test utilities for record mapping
//!
//! Row builders shared by the column mapping and mapper test modules.

use crate::app::services::csv_parser::Row;


/// Build rows from string slices
pub fn rows(data: &[&[&str]]) -> Vec<Row> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

/// Standard legacy header
pub const LEGACY_HEADER: &[&str] = &["name", "industry", "status", "url", "year"];

/// Header used by database exports
pub const DATABASE_HEADER: &[&str] = &["id", "name", "year", "website", "tag", "industry"];
