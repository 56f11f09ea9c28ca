//! Index page splicing

use regex::{NoExpand, Regex};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use super::markup::build_portfolio_html;
use crate::app::models::PortfolioEntry;
use crate::app::services::portfolio_stats::{PortfolioStats, calculate_stats, sort_portfolio};
use crate::config::{Config, RenderConfig};
use crate::constants::{ACTIVE_STAT_ID, EXIT_STAT_ID};
use crate::{Error, Result};

/// What a render run wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub entries_rendered: usize,
    pub stats: PortfolioStats,
}

/// Rewrite the first `<div class="stat-value" id="...">` block with a new value
pub fn replace_stat_value(text: &str, element_id: &str, value: usize) -> Result<String> {
    let pattern = format!(
        r#"<div class="stat-value" id="{}">.*?</div>"#,
        regex::escape(element_id)
    );
    let re = Regex::new(&pattern)
        .map_err(|e| Error::render(format!("Invalid stat pattern for '{}': {}", element_id, e)))?;

    if !re.is_match(text) {
        return Err(Error::render(format!(
            "Could not find stat element with id '{}'",
            element_id
        )));
    }

    let replacement = format!(
        r#"<div class="stat-value" id="{}">{}</div>"#,
        element_id, value
    );
    Ok(re.replacen(text, 1, NoExpand(&replacement)).into_owned())
}

/// Splice new portfolio content between the markers and refresh the stats
pub fn update_index(
    html: &str,
    content: &str,
    stats: PortfolioStats,
    render: &RenderConfig,
) -> Result<String> {
    let start = render.start_marker.as_str();
    let end = render.end_marker.as_str();

    let (before, rest) = html
        .split_once(start)
        .ok_or_else(|| Error::render(format!("Start marker '{}' not found", start)))?;
    let (_, after) = rest
        .split_once(end)
        .ok_or_else(|| Error::render(format!("End marker '{}' not found after start marker", end)))?;

    let updated = format!("{before}{start}\n{content}{end}{after}");
    let updated = replace_stat_value(&updated, ACTIVE_STAT_ID, stats.active)?;
    replace_stat_value(&updated, EXIT_STAT_ID, stats.exits)
}

/// Regenerate the configured index page from entries
///
/// Entries are shown in display order unless `keep_order` is set. Nothing is
/// written if the page lacks the markers or stat blocks.
pub async fn render_site(
    config: &Config,
    entries: &[PortfolioEntry],
    keep_order: bool,
) -> Result<RenderSummary> {
    let index_path: &Path = &config.render.index_path;
    info!("Rendering portfolio into {}", index_path.display());

    let html = tokio::fs::read_to_string(index_path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(index_path.display().to_string())
        } else {
            Error::io(format!("Failed to read {}", index_path.display()), e)
        }
    })?;

    let ordered;
    let entries = if keep_order {
        entries
    } else {
        ordered = sort_portfolio(entries);
        &ordered[..]
    };

    let stats = calculate_stats(entries);
    let content = build_portfolio_html(entries);
    let updated = update_index(&html, &content, stats, &config.render)?;
    debug!("Index page rewritten ({} -> {} bytes)", html.len(), updated.len());

    tokio::fs::write(index_path, updated)
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", index_path.display()), e))?;

    info!(
        "Updated portfolio with {} rows ({} active, {} exits)",
        entries.len(),
        stats.active,
        stats.exits
    );

    Ok(RenderSummary {
        entries_rendered: entries.len(),
        stats,
    })
}
