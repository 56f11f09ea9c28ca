use super::{SAMPLE_INDEX, entry};
use crate::Error;
use crate::app::services::portfolio_stats::PortfolioStats;
use crate::app::services::site_renderer::{render_site, replace_stat_value, update_index};
use crate::config::{Config, RenderConfig};

fn stats(active: usize, exits: usize) -> PortfolioStats {
    PortfolioStats { active, exits }
}

#[test]
fn test_update_index_replaces_marked_section() {
    let updated = update_index(
        SAMPLE_INDEX,
        "<p>new</p>\n",
        stats(5, 2),
        &RenderConfig::default(),
    )
    .unwrap();

    assert!(updated.contains("<!-- PORTFOLIO:START -->\n<p>new</p>\n<!-- PORTFOLIO:END -->"));
    assert!(!updated.contains("stale content"));
    assert!(updated.contains(r#"<div class="stat-value" id="portfolio-count">5</div>"#));
    assert!(updated.contains(r#"<div class="stat-value" id="exit-count">2</div>"#));
    assert!(updated.starts_with("<html>"));
    assert!(updated.ends_with("</html>\n"));
}

#[test]
fn test_update_index_is_repeatable() {
    let render = RenderConfig::default();
    let once = update_index(SAMPLE_INDEX, "<p>x</p>\n", stats(1, 0), &render).unwrap();
    let twice = update_index(&once, "<p>x</p>\n", stats(1, 0), &render).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_missing_markers_are_render_errors() {
    let render = RenderConfig::default();

    let no_start = SAMPLE_INDEX.replace("<!-- PORTFOLIO:START -->", "");
    assert!(matches!(
        update_index(&no_start, "", stats(0, 0), &render),
        Err(Error::Render { .. })
    ));

    let no_end = SAMPLE_INDEX.replace("<!-- PORTFOLIO:END -->", "");
    assert!(matches!(
        update_index(&no_end, "", stats(0, 0), &render),
        Err(Error::Render { .. })
    ));
}

#[test]
fn test_missing_stat_element_is_render_error() {
    let html = SAMPLE_INDEX.replace("exit-count", "exits");
    let err = update_index(&html, "", stats(0, 0), &RenderConfig::default()).unwrap_err();
    assert!(err.to_string().contains("exit-count"));
}

#[test]
fn test_replace_stat_value_only_first_match() {
    let html = concat!(
        r#"<div class="stat-value" id="exit-count">1</div>"#,
        r#"<div class="stat-value" id="exit-count">1</div>"#
    );
    let updated = replace_stat_value(html, "exit-count", 9).unwrap();
    assert_eq!(
        updated,
        concat!(
            r#"<div class="stat-value" id="exit-count">9</div>"#,
            r#"<div class="stat-value" id="exit-count">1</div>"#
        )
    );
}

#[tokio::test]
async fn test_render_site_sorts_and_writes() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("index.html");
    std::fs::write(&index_path, SAMPLE_INDEX).unwrap();

    let config = Config::default().with_index_path(&index_path);
    let entries = vec![
        entry("Gone", "RIP", None, None, Some("2015")),
        entry("Sold", "Exited", None, None, Some("2018")),
        entry("Held", "Invested", None, None, Some("2020")),
    ];

    let summary = render_site(&config, &entries, false).await.unwrap();
    assert_eq!(summary.entries_rendered, 3);
    assert_eq!(summary.stats, stats(2, 1));

    let written = std::fs::read_to_string(&index_path).unwrap();
    let held = written.find("Held").unwrap();
    let sold = written.find("Sold").unwrap();
    let gone = written.find("Gone").unwrap();
    assert!(held < sold && sold < gone);
    assert!(written.contains(r#"id="portfolio-count">2</div>"#));
}

#[tokio::test]
async fn test_render_site_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("index.html");
    std::fs::write(&index_path, SAMPLE_INDEX).unwrap();

    let config = Config::default().with_index_path(&index_path);
    let entries = vec![
        entry("Gone", "RIP", None, None, None),
        entry("Held", "Invested", None, None, None),
    ];

    render_site(&config, &entries, true).await.unwrap();

    let written = std::fs::read_to_string(&index_path).unwrap();
    assert!(written.find("Gone").unwrap() < written.find("Held").unwrap());
}

#[tokio::test]
async fn test_render_site_leaves_file_untouched_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("index.html");
    std::fs::write(&index_path, "<html>no markers</html>").unwrap();

    let config = Config::default().with_index_path(&index_path);
    let result = render_site(&config, &[], false).await;

    assert!(matches!(result, Err(Error::Render { .. })));
    assert_eq!(
        std::fs::read_to_string(&index_path).unwrap(),
        "<html>no markers</html>"
    );
}

#[tokio::test]
async fn test_render_site_missing_index() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_index_path(dir.path().join("missing.html"));
    let err = render_site(&config, &[], false).await.unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}
