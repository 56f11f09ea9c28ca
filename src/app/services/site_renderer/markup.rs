//! Portfolio card markup

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::borrow::Cow;

use crate::app::models::PortfolioEntry;
use crate::constants::{EMPTY_FIELD_PLACEHOLDER, UNTITLED_COMPANY, messages};

fn text_or_placeholder(value: Option<&str>) -> Cow<'_, str> {
    encode_text(value.unwrap_or(EMPTY_FIELD_PLACEHOLDER))
}

/// Markup for a single portfolio card
pub fn card_markup(entry: &PortfolioEntry) -> String {
    let name = if entry.name.is_empty() {
        UNTITLED_COMPANY
    } else {
        entry.name.as_str()
    };

    let link = match entry.url.as_deref() {
        Some(url) => format!(
            "                <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit Website</a>\n",
            encode_double_quoted_attribute(url)
        ),
        None => "                <span></span>\n".to_string(),
    };

    format!(
        concat!(
            "            <article class=\"portfolio-card\">\n",
            "              <div class=\"portfolio-card-header\">\n",
            "                <div>\n",
            "                  <h3>{name}</h3>\n",
            "                  <p class=\"industry\">{industry}</p>\n",
            "                </div>\n",
            "                <span class=\"{badge}\">{status}</span>\n",
            "              </div>\n",
            "              <div class=\"portfolio-card-footer\">\n",
            "{link}",
            "                <div class=\"year\">\n",
            "                  <span>{year}</span>\n",
            "                  <span class=\"year-caption\">Year</span>\n",
            "                </div>\n",
            "              </div>\n",
            "            </article>\n",
        ),
        name = encode_text(name),
        industry = text_or_placeholder(entry.industry.as_deref()),
        badge = entry.status.badge_class(),
        status = encode_text(entry.status.as_str()),
        link = link,
        year = text_or_placeholder(entry.year.as_deref()),
    )
}

/// Concatenated cards, or an empty-state paragraph when there are none
pub fn build_portfolio_html(entries: &[PortfolioEntry]) -> String {
    if entries.is_empty() {
        return format!(
            "            <p class=\"portfolio-empty\">{}</p>\n",
            messages::NO_ENTRIES
        );
    }

    entries.iter().map(card_markup).collect()
}
