//! Headline stats and display ordering for portfolio records
//!
//! Both operations work on anything implementing
//! [`PortfolioRecord`](crate::app::models::PortfolioRecord), so CSV entries and
//! database rows are counted and ordered identically.

pub mod sort;
pub mod stats;

pub use sort::{compare_records, sort_portfolio};
pub use stats::{PortfolioStats, calculate_stats};
