//! Static portfolio page generation
//!
//! Rebuilds the portfolio section of a static landing page from mapped
//! entries. The page is edited in place: only the text between the portfolio
//! markers and the two headline stat values are rewritten.
//!
//! # Architecture
//!
//! - [`markup`] - portfolio cards, escaped with `html_escape`
//! - [`index`] - marker splicing, stat rewriting and the file round trip

pub mod index;
pub mod markup;

#[cfg(test)]
pub mod tests;

pub use index::{RenderSummary, render_site, replace_stat_value, update_index};
pub use markup::{build_portfolio_html, card_markup};
