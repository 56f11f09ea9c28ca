//! Data models for portfolio ingestion
//!
//! This module contains the record shapes used across the crate: the
//! normalised [`PortfolioEntry`] produced from CSV rows, the
//! [`PortfolioCompany`] row shape of the hosted database, and the admin
//! input/payload types that sit in front of it.

use crate::app::services::record_mapper::normalise_url;
use crate::app::services::status::normalise_status;
use crate::constants::{DEFAULT_DB_TAG, status_labels};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Status
// =============================================================================

/// Canonical portfolio status
///
/// Unrecognised vocabulary is kept verbatim (trimmed) in [`PortfolioStatus::Other`]
/// instead of being rejected. Construct values through
/// [`normalise_status`] so that equal labels always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortfolioStatus {
    /// Currently held
    Invested,
    /// Sold or otherwise exited
    Exited,
    /// Shut down (`rip`, `inactive`, `closed`)
    Rip,
    /// No status supplied
    Unknown,
    /// Passthrough for vocabulary outside the canonical set
    Other(String),
}

impl PortfolioStatus {
    /// Display label for this status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Invested => status_labels::INVESTED,
            Self::Exited => status_labels::EXITED,
            Self::Rip => status_labels::RIP,
            Self::Unknown => status_labels::UNKNOWN,
            Self::Other(label) => label,
        }
    }

    /// Rank used as the first sort key: invested, then exited, then the rest
    pub fn sort_rank(&self) -> u8 {
        match self {
            Self::Invested => 0,
            Self::Exited => 1,
            _ => 2,
        }
    }

    /// CSS classes for the status badge on the static page
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Invested => "status-badge status-invested",
            Self::Exited => "status-badge status-exited",
            _ => "status-badge status-rip",
        }
    }
}

impl fmt::Display for PortfolioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PortfolioStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PortfolioStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(normalise_status(raw.as_deref()))
    }
}

// =============================================================================
// Record Access
// =============================================================================

/// Common view over the record shapes that stats and sorting operate on
pub trait PortfolioRecord {
    /// Company name
    fn name(&self) -> &str;

    /// Normalised status
    fn status(&self) -> PortfolioStatus;

    /// Free-form year, if any
    fn year(&self) -> Option<&str>;
}

// =============================================================================
// Portfolio Entry
// =============================================================================

/// A normalised portfolio record derived from one CSV data row
///
/// Invariants upheld by the record mapper:
/// - `name` is never empty
/// - `url`, when present, starts with `http://` or `https://`
/// - optional fields are `None` rather than empty strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    pub status: PortfolioStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl PortfolioEntry {
    /// Convert into admin input so the entry can be checked against the form schema
    pub fn to_input(&self) -> PortfolioInput {
        PortfolioInput {
            name: Some(self.name.clone()),
            year: self.year.clone(),
            website: self.url.clone(),
            tag: Some(self.status.as_str().to_string()),
            industry: self.industry.clone(),
        }
    }
}

impl PortfolioRecord for PortfolioEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> PortfolioStatus {
        self.status.clone()
    }

    fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }
}

// =============================================================================
// Database Row
// =============================================================================

/// Row of the `portfolio_companies` table as exported from the hosted database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCompany {
    pub id: i64,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    pub name: String,

    #[serde(default)]
    pub year: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub tag: Option<String>,

    #[serde(default)]
    pub industry: Option<String>,
}

impl PortfolioRecord for PortfolioCompany {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> PortfolioStatus {
        normalise_status(self.tag.as_deref())
    }

    fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }
}

impl From<&PortfolioCompany> for PortfolioEntry {
    fn from(company: &PortfolioCompany) -> Self {
        fn non_empty(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            name: company.name.trim().to_string(),
            industry: non_empty(&company.industry),
            status: company.status(),
            url: non_empty(&company.website).map(|url| normalise_url(&url)),
            year: non_empty(&company.year),
        }
    }
}

// =============================================================================
// Admin Input
// =============================================================================

/// Raw admin form submission, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
}

/// Validated admin submission: trimmed, with empty optionals removed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioPayload {
    pub name: String,
    pub year: Option<String>,
    pub website: Option<String>,
    pub tag: Option<String>,
    pub industry: Option<String>,
}

/// Insert shape for the `portfolio_companies` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPortfolioCompany {
    pub name: String,
    pub industry: Option<String>,
    pub tag: String,
    pub website: Option<String>,
    pub year: Option<String>,
}

impl PortfolioPayload {
    /// Build the database insert row, defaulting a missing tag to `Invested`
    pub fn into_db_row(self) -> NewPortfolioCompany {
        NewPortfolioCompany {
            name: self.name,
            industry: self.industry,
            tag: self.tag.unwrap_or_else(|| DEFAULT_DB_TAG.to_string()),
            website: self.website,
            year: self.year,
        }
    }
}
