//! Portfolio ingestion pipeline
//!
//! Glues the tokenizer and record mapper to the file system, and turns the
//! outcome into the short status line shown to whoever triggered the load.
//! A file that cannot be read is an error; a file that parses to nothing is
//! a successful, empty result.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::app::models::PortfolioCompany;
use crate::app::services::csv_parser::parse_with_options;
use crate::app::services::record_mapper::{MappingResult, map_rows_with_aliases};
use crate::config::Config;
use crate::constants::messages;
use crate::{Error, Result};

/// Parse and map CSV text already in memory
pub fn ingest_text(text: &str, config: &Config) -> MappingResult {
    let rows = parse_with_options(text, &config.parser);
    map_rows_with_aliases(&rows, &config.columns)
}

/// Read file contents as text, replacing invalid UTF-8 sequences
async fn read_text(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::io(format!("Failed to read {}", path.display()), e)
        }
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8; invalid bytes replaced with U+FFFD",
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Load a portfolio CSV from disk and map it to entries
pub async fn load_portfolio(path: &Path, config: &Config) -> Result<MappingResult> {
    info!("Loading portfolio CSV: {}", path.display());

    let text = read_text(path).await?;
    let result = ingest_text(&text, config);

    if result.is_empty() {
        warn!("{} produced no portfolio entries", path.display());
    } else {
        info!(
            "Loaded {} entries from {}",
            result.entry_count(),
            path.display()
        );
    }

    Ok(result)
}

/// Load a JSON array of database rows (`portfolio_companies` export)
pub async fn load_company_export(path: &Path) -> Result<Vec<PortfolioCompany>> {
    info!("Loading portfolio export: {}", path.display());

    let text = read_text(path).await?;
    let companies: Vec<PortfolioCompany> = serde_json::from_str(&text).map_err(|e| {
        Error::serialization(format!("Invalid portfolio export {}", path.display()), e)
    })?;

    debug!("Export contained {} rows", companies.len());
    Ok(companies)
}

/// How a feedback message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

/// One-line outcome of a load, suitable for a status banner
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Feedback {
    pub tone: Tone,
    pub message: String,
}

impl Feedback {
    pub fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }

    /// Feedback for a file the user chose explicitly
    pub fn for_upload(result: &Result<MappingResult>, file_name: &str) -> Self {
        match result {
            Ok(mapped) if mapped.is_empty() => Self::new(Tone::Warning, messages::UPLOAD_EMPTY),
            Ok(mapped) => {
                let count = mapped.entry_count();
                let noun = if count == 1 { "entry" } else { "entries" };
                Self::new(
                    Tone::Success,
                    format!("Previewing {} {} from {}.", count, noun, file_name),
                )
            }
            Err(e) if e.is_read_failure() => Self::new(Tone::Error, messages::UPLOAD_READ_FAILED),
            Err(_) => Self::new(Tone::Error, messages::UPLOAD_PARSE_FAILED),
        }
    }

    /// Feedback for the bundled default CSV; silent when entries were loaded
    pub fn for_default(result: &Result<MappingResult>) -> Option<Self> {
        match result {
            Ok(mapped) if mapped.is_empty() => {
                Some(Self::new(Tone::Warning, messages::DEFAULT_EMPTY))
            }
            Ok(_) => None,
            Err(_) => Some(Self::new(Tone::Error, messages::DEFAULT_FAILED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PortfolioStatus;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_ingest_text_uses_config_aliases() {
        let mut config = Config::default();
        config.columns.name = vec!["company".to_string()];

        let result = ingest_text("company,tag\nAcme,exited\n", &config);
        assert_eq!(result.entry_count(), 1);
        assert_eq!(result.entries[0].name, "Acme");
        assert_eq!(result.entries[0].status, PortfolioStatus::Exited);
    }

    #[test]
    fn test_ingest_text_respects_trim_flag() {
        let config = Config::default().preserving_quoted_whitespace();
        let result = ingest_text("name,industry\nAcme,\"  Space  \"\n", &config);
        assert_eq!(result.entries[0].industry.as_deref(), Some("  Space  "));
    }

    #[tokio::test]
    async fn test_load_portfolio_success() {
        let file = temp_file(b"name,status,url\nAcme,Invested,acme.io\nBeta,RIP,\n");
        let result = load_portfolio(file.path(), &Config::default())
            .await
            .unwrap();

        assert_eq!(result.entry_count(), 2);
        assert_eq!(result.entries[0].url.as_deref(), Some("https://acme.io"));
    }

    #[tokio::test]
    async fn test_load_portfolio_empty_file_is_ok() {
        let file = temp_file(b"");
        let result = load_portfolio(file.path(), &Config::default())
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_load_portfolio_missing_file() {
        let err = load_portfolio(Path::new("/nonexistent/portfolio.csv"), &Config::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert!(err.is_read_failure());
    }

    #[tokio::test]
    async fn test_load_portfolio_invalid_utf8_is_lossy() {
        // Windows-1252 "Troms\xf8"
        let file = temp_file(b"name,industry\nTroms\xf8 Fisk,Seafood\nAcme,Robotics\n");
        let result = load_portfolio(file.path(), &Config::default())
            .await
            .unwrap();

        assert_eq!(result.entry_count(), 2);
        assert_eq!(result.entries[0].name, "Troms\u{fffd} Fisk");
        assert_eq!(result.entries[1].name, "Acme");
    }

    #[tokio::test]
    async fn test_load_portfolio_strips_byte_order_mark() {
        let file = temp_file(b"\xEF\xBB\xBFname,status\nAcme,Invested\n");
        let result = load_portfolio(file.path(), &Config::default())
            .await
            .unwrap();

        assert_eq!(result.entry_count(), 1);
        assert_eq!(result.entries[0].name, "Acme");
        assert!(!result.stats.missing_columns.contains(&"name".to_string()));
    }

    #[tokio::test]
    async fn test_load_company_export() {
        let file = temp_file(
            br#"[
                {"id": 1, "created_at": "2024-01-05T10:00:00Z", "name": "Acme", "tag": "Exited", "year": "2019"},
                {"id": 2, "name": "Beta", "website": null}
            ]"#,
        );

        let companies = load_company_export(file.path()).await.unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].tag.as_deref(), Some("Exited"));
        assert!(companies[0].created_at.is_some());
        assert_eq!(companies[1].website, None);
    }

    #[tokio::test]
    async fn test_load_company_export_rejects_bad_json() {
        let file = temp_file(b"{not json");
        let err = load_company_export(file.path()).await.unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }

    #[test]
    fn test_upload_feedback_messages() {
        let config = Config::default();
        let one = Ok(ingest_text("name\nAcme\n", &config));
        let two = Ok(ingest_text("name\nAcme\nBeta\n", &config));
        let none = Ok(ingest_text("name\n", &config));

        assert_eq!(
            Feedback::for_upload(&one, "upload.csv").message,
            "Previewing 1 entry from upload.csv."
        );

        let feedback = Feedback::for_upload(&two, "upload.csv");
        assert_eq!(feedback.tone, Tone::Success);
        assert_eq!(feedback.message, "Previewing 2 entries from upload.csv.");

        let feedback = Feedback::for_upload(&none, "upload.csv");
        assert_eq!(feedback.tone, Tone::Warning);
        assert_eq!(feedback.message, messages::UPLOAD_EMPTY);
    }

    #[test]
    fn test_upload_feedback_errors() {
        let read: Result<MappingResult> = Err(Error::file_not_found("x.csv"));
        let parse: Result<MappingResult> = Err(Error::data_validation("bad bytes"));

        assert_eq!(
            Feedback::for_upload(&read, "x.csv").message,
            messages::UPLOAD_READ_FAILED
        );
        let feedback = Feedback::for_upload(&parse, "x.csv");
        assert_eq!(feedback.tone, Tone::Error);
        assert_eq!(feedback.message, messages::UPLOAD_PARSE_FAILED);
    }

    #[test]
    fn test_default_feedback() {
        let config = Config::default();
        let loaded = Ok(ingest_text("name\nAcme\n", &config));
        let empty = Ok(ingest_text("", &config));
        let failed: Result<MappingResult> = Err(Error::file_not_found("data/portfolio.csv"));

        assert_eq!(Feedback::for_default(&loaded), None);
        assert_eq!(
            Feedback::for_default(&empty),
            Some(Feedback::new(Tone::Warning, messages::DEFAULT_EMPTY))
        );
        assert_eq!(
            Feedback::for_default(&failed).map(|f| f.tone),
            Some(Tone::Error)
        );
    }
}
