//! Admin input validation
//!
//! Mirrors the admin form schema: a required name, optional trimmed fields,
//! and a four-digit year. All issues are collected before failing so the
//! caller can report them together.

use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::{PortfolioInput, PortfolioPayload};
use crate::constants::messages;
use crate::{Error, Result};

static FOUR_DIGIT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year pattern"));

/// Trim an optional field, treating blank as absent
fn optional_field(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validate an admin submission and produce the cleaned payload
pub fn validate_input(input: &PortfolioInput) -> Result<PortfolioPayload> {
    let mut issues = Vec::new();

    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        issues.push(messages::NAME_REQUIRED.to_string());
    }

    let year = optional_field(input.year.as_deref());
    if let Some(year) = &year {
        if !FOUR_DIGIT_YEAR.is_match(year) {
            issues.push(messages::YEAR_FORMAT.to_string());
        }
    }

    if !issues.is_empty() {
        return Err(Error::invalid_input(issues));
    }

    Ok(PortfolioPayload {
        name: name.to_string(),
        year,
        website: optional_field(input.website.as_deref()),
        tag: optional_field(input.tag.as_deref()),
        industry: optional_field(input.industry.as_deref()),
    })
}
