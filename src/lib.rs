//! Portfolio Ingest Library
//!
//! Tools for turning a portfolio CSV export (or a database dump of the same
//! records) into normalised portfolio entries for a small investment-firm
//! website.
//!
//! This library provides tools for:
//! - Tokenising CSV text with quoted fields, embedded commas and newlines
//! - Mapping rows onto portfolio entries through a configurable header alias table
//! - Canonicalising status vocabulary (`Invested`, `Exited`, `RIP`)
//! - Computing headline stats and the display sort order
//! - Validating admin input and regenerating the static portfolio page

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_parser;
        pub mod ingest;
        pub mod portfolio_stats;
        pub mod record_mapper;
        pub mod site_renderer;
        pub mod status;
        pub mod validation;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{PortfolioCompany, PortfolioEntry, PortfolioStatus};
pub use app::services::csv_parser::parse;
pub use app::services::portfolio_stats::{calculate_stats, sort_portfolio};
pub use app::services::record_mapper::map_rows_to_entries;
pub use app::services::status::normalise_status;
pub use config::Config;

/// Result type alias for portfolio ingestion
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for everything outside the pure parsing core
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// JSON (de)serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Admin input failed schema validation
    #[error("Invalid portfolio input: {}", issues.join("; "))]
    InvalidInput { issues: Vec<String> },

    /// Static page rendering error
    #[error("Render error: {message}")]
    Render { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an invalid input error from collected issues
    pub fn invalid_input(issues: Vec<String>) -> Self {
        Self::InvalidInput { issues }
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True when the failure happened before any text was available
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::FileNotFound { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: "unknown".to_string(),
            source: error,
        }
    }
}
