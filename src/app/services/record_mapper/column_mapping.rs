//! Header analysis for portfolio CSV files
//!
//! Resolves each portfolio field to a column index through an alias table,
//! so the legacy export (`status`, `url`) and the database export (`tag`,
//! `website`) are read by the same mapper.

use crate::constants::default_aliases;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Portfolio fields that can be read from a CSV column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortfolioField {
    Name,
    Industry,
    Status,
    Url,
    Year,
}

impl PortfolioField {
    pub const ALL: [PortfolioField; 5] = [
        PortfolioField::Name,
        PortfolioField::Industry,
        PortfolioField::Status,
        PortfolioField::Url,
        PortfolioField::Year,
    ];
}

impl fmt::Display for PortfolioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Industry => "industry",
            Self::Status => "status",
            Self::Url => "url",
            Self::Year => "year",
        };
        f.write_str(name)
    }
}

/// Header names accepted for each field, highest priority first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub name: Vec<String>,
    pub industry: Vec<String>,
    pub status: Vec<String>,
    pub url: Vec<String>,
    pub year: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        }

        Self {
            name: owned(default_aliases::NAME),
            industry: owned(default_aliases::INDUSTRY),
            status: owned(default_aliases::STATUS),
            url: owned(default_aliases::URL),
            year: owned(default_aliases::YEAR),
        }
    }
}

impl ColumnAliases {
    /// Aliases configured for a field
    pub fn for_field(&self, field: PortfolioField) -> &[String] {
        match field {
            PortfolioField::Name => &self.name,
            PortfolioField::Industry => &self.industry,
            PortfolioField::Status => &self.status,
            PortfolioField::Url => &self.url,
            PortfolioField::Year => &self.year,
        }
    }

    /// Fields whose alias list is empty or contains only blank names
    pub fn empty_fields(&self) -> Vec<PortfolioField> {
        PortfolioField::ALL
            .into_iter()
            .filter(|&field| self.for_field(field).iter().all(|a| a.trim().is_empty()))
            .collect()
    }
}

/// Resolved column index for each field present in the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub field_to_index: HashMap<PortfolioField, usize>,
}

impl ColumnMapping {
    /// Analyze a header row
    ///
    /// Header cells are compared case-insensitively. Aliases are tried in
    /// order and the first one present wins; a header repeated in several
    /// columns resolves to its first column.
    pub fn analyze(header: &[String], aliases: &ColumnAliases) -> Self {
        let headers: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();
        let mut field_to_index = HashMap::new();

        for field in PortfolioField::ALL {
            let index = aliases.for_field(field).iter().find_map(|alias| {
                let alias = alias.trim().to_lowercase();
                headers.iter().position(|h| *h == alias)
            });

            if let Some(index) = index {
                field_to_index.insert(field, index);
            }
        }

        Self { field_to_index }
    }

    /// Get the column index for a field
    pub fn get_index(&self, field: PortfolioField) -> Option<usize> {
        self.field_to_index.get(&field).copied()
    }

    /// Check if a field was found in the header
    pub fn has_field(&self, field: PortfolioField) -> bool {
        self.field_to_index.contains_key(&field)
    }

    /// Fields not present in the header
    pub fn missing_fields(&self) -> Vec<PortfolioField> {
        PortfolioField::ALL
            .into_iter()
            .filter(|field| !self.has_field(*field))
            .collect()
    }

    /// Look up a field in a data row; out-of-range indices are absent
    pub fn value<'a>(&self, row: &'a [String], field: PortfolioField) -> Option<&'a str> {
        self.get_index(field)
            .and_then(|index| row.get(index))
            .map(String::as_str)
    }
}
