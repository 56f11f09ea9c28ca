//! Active/exit tallies shown on the landing page

use crate::app::models::{PortfolioRecord, PortfolioStatus};
use serde::Serialize;

/// Headline counts for the landing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioStats {
    /// Records whose status is anything but `RIP`
    pub active: usize,
    /// Records whose status is `Exited`
    pub exits: usize,
}

/// One-pass tally of active companies and exits
///
/// Exited companies count towards both numbers; `RIP` towards neither.
pub fn calculate_stats<R: PortfolioRecord>(records: &[R]) -> PortfolioStats {
    records
        .iter()
        .fold(PortfolioStats::default(), |mut stats, record| {
            let status = record.status();
            if !status.as_str().eq_ignore_ascii_case("rip") {
                stats.active += 1;
            }
            if status == PortfolioStatus::Exited {
                stats.exits += 1;
            }
            stats
        })
}
