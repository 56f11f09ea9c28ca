//! Display ordering for portfolio records
//!
//! Records are grouped by status rank (invested, exited, everything else).
//! Within a rank, records with a numeric year come first, newest first;
//! records without one follow. Remaining ties are broken by name.

use std::cmp::Ordering;

use crate::app::models::PortfolioRecord;

/// Numeric value of a free-form year, if it has one
fn numeric_year(year: Option<&str>) -> Option<f64> {
    year.map(str::trim)
        .filter(|y| !y.is_empty())
        .and_then(|y| y.parse::<f64>().ok())
        .filter(|y| y.is_finite())
}

/// Case-insensitive first, then exact, so the order is total
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Total order used by [`sort_portfolio`]
pub fn compare_records<R: PortfolioRecord>(a: &R, b: &R) -> Ordering {
    let by_rank = a.status().sort_rank().cmp(&b.status().sort_rank());

    let by_year = || match (numeric_year(a.year()), numeric_year(b.year())) {
        (Some(year_a), Some(year_b)) => year_b.total_cmp(&year_a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_rank
        .then_with(by_year)
        .then_with(|| compare_names(a.name(), b.name()))
}

/// Return a sorted copy of the records; the input is left untouched
///
/// The sort is stable, so records that compare equal keep their input order.
pub fn sort_portfolio<R: PortfolioRecord + Clone>(records: &[R]) -> Vec<R> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_records(a, b));
    sorted
}
