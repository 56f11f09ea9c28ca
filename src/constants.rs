//! Application constants for portfolio ingestion
//!
//! This module contains the status vocabulary, default header aliases,
//! default file locations and the user-facing messages shared by the
//! CLI commands.

// =============================================================================
// Status Vocabulary
// =============================================================================

/// Canonical status labels as shown on the site
pub mod status_labels {
    pub const INVESTED: &str = "Invested";
    pub const EXITED: &str = "Exited";
    pub const RIP: &str = "RIP";
    pub const UNKNOWN: &str = "Unknown";
}

/// Lower-case spellings that canonicalise to `RIP`
pub const RIP_SYNONYMS: &[&str] = &["rip", "inactive", "closed"];

/// Status assigned to admin submissions that omit a tag
pub const DEFAULT_DB_TAG: &str = status_labels::INVESTED;

// =============================================================================
// Header Aliases
// =============================================================================

/// Header names accepted for each portfolio field, in priority order.
///
/// The legacy CSV export uses `status`/`url` while the database export uses
/// `tag`/`website`; both are accepted by default.
pub mod default_aliases {
    pub const NAME: &[&str] = &["name"];
    pub const INDUSTRY: &[&str] = &["industry"];
    pub const STATUS: &[&str] = &["status", "tag"];
    pub const URL: &[&str] = &["url", "website"];
    pub const YEAR: &[&str] = &["year"];
}

/// URL schemes that are left untouched by normalisation
pub const ACCEPTED_URL_SCHEMES: &[&str] = &["http://", "https://"];

/// Scheme prepended to bare hosts
pub const DEFAULT_URL_SCHEME: &str = "https://";

// =============================================================================
// Paths and Markers
// =============================================================================

/// Default CSV asset, relative to the working directory
pub const DEFAULT_CSV_PATH: &str = "data/portfolio.csv";

/// Default static page to regenerate
pub const DEFAULT_INDEX_PATH: &str = "index.html";

/// Config directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "portfolio-ingest";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const PORTFOLIO_START_MARKER: &str = "<!-- PORTFOLIO:START -->";
pub const PORTFOLIO_END_MARKER: &str = "<!-- PORTFOLIO:END -->";

/// Element id of the active-company stat block
pub const ACTIVE_STAT_ID: &str = "portfolio-count";

/// Element id of the exits stat block
pub const EXIT_STAT_ID: &str = "exit-count";

// =============================================================================
// Environment Overrides
// =============================================================================

pub mod env_vars {
    pub const CSV_PATH: &str = "PORTFOLIO_CSV_PATH";
    pub const INDEX_PATH: &str = "PORTFOLIO_INDEX_PATH";
    pub const TRIM_QUOTED: &str = "PORTFOLIO_TRIM_QUOTED";
}

// =============================================================================
// Feedback Messages
// =============================================================================

pub mod messages {
    pub const DEFAULT_EMPTY: &str =
        "The default CSV is empty. Upload a file to populate the portfolio.";
    pub const DEFAULT_FAILED: &str =
        "Unable to load the default CSV. Upload a file to get started.";
    pub const UPLOAD_EMPTY: &str = "CSV parsed but no valid rows were found.";
    pub const UPLOAD_PARSE_FAILED: &str =
        "Unable to parse that CSV file. Please check the format.";
    pub const UPLOAD_READ_FAILED: &str = "Could not read the selected file. Try again.";
    pub const NO_ENTRIES: &str = "No portfolio entries yet.";
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const YEAR_FORMAT: &str = "Year must be a four digit number";
}

/// Placeholder shown for missing industry/year values
pub const EMPTY_FIELD_PLACEHOLDER: &str = "—";

/// Fallback card title
pub const UNTITLED_COMPANY: &str = "Untitled company";

/// Default logging verbosity
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted for `logging.level`
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
