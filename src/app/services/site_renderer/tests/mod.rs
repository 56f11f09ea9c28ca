//! Test fixtures for the site renderer

mod index_tests;

use crate::app::models::PortfolioEntry;
use crate::app::services::status::normalise_status;

/// Minimal landing page with markers and both stat blocks
pub const SAMPLE_INDEX: &str = r#"<html>
<body>
  <div class="stats">
    <div class="stat-value" id="portfolio-count">0</div>
    <div class="stat-value" id="exit-count">0</div>
  </div>
  <section class="portfolio-grid">
<!-- PORTFOLIO:START -->
            <p>stale content</p>
<!-- PORTFOLIO:END -->
  </section>
</body>
</html>
"#;

pub fn entry(
    name: &str,
    status: &str,
    industry: Option<&str>,
    url: Option<&str>,
    year: Option<&str>,
) -> PortfolioEntry {
    PortfolioEntry {
        name: name.to_string(),
        industry: industry.map(str::to_string),
        status: normalise_status(Some(status)),
        url: url.map(str::to_string),
        year: year.map(str::to_string),
    }
}
