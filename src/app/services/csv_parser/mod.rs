//! CSV tokenizer for portfolio exports
//!
//! A single-pass, quote-aware tokenizer for the one comma-delimited schema the
//! site ingests. It is deliberately forgiving: ragged rows, unterminated quotes
//! and mixed line endings all produce *some* rows rather than an error.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - character-level state machine producing raw rows
//! - [`ParseOptions`] - the trimming behaviour for quoted fields
//!
//! ## Usage
//!
//! ```rust
//! use portfolio_ingest::app::services::csv_parser::parse;
//!
//! let rows = parse("name,industry\n\"Acme, Inc\",Robotics\n");
//! assert_eq!(rows[1], vec!["Acme, Inc".to_string(), "Robotics".to_string()]);
//! ```

pub mod tokenizer;

#[cfg(test)]
pub mod tests;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use tokenizer::Tokenizer;

/// One logical CSV record: ordered cells, never null
pub type Row = Vec<String>;

/// Tokenizer behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Trim every field, including whitespace written inside quotes.
    ///
    /// `true` matches the historical behaviour of the site. `false` only trims
    /// whitespace outside the quoted section of a field.
    pub trim_quoted_fields: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            trim_quoted_fields: true,
        }
    }
}

/// Parse CSV text into rows using the default options
pub fn parse(text: &str) -> Vec<Row> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse CSV text into rows
///
/// Rows whose cells are all empty are dropped. The first returned row, if any,
/// is the header row.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Vec<Row> {
    let rows = Tokenizer::new(*options).tokenize(text);
    let total = rows.len();

    let rows: Vec<Row> = rows
        .into_iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    debug!(
        "Tokenized {} bytes into {} rows ({} blank rows dropped)",
        text.len(),
        rows.len(),
        total - rows.len()
    );

    rows
}
