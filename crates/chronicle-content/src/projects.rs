//! Projects read out of a hand-authored projects page.
//!
//! This is the fallback used when a site keeps its projects as HTML rather
//! than as front-matter files. It depends on the page's markup shape: each
//! project is an `<article class="project" id="...">` holding an
//! `h2.project-title` and a `p.project-tagline`. Blocks that do not match
//! are silently skipped.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::entry::{Entry, EntryKind};

static PROJECT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<article class="project" id="([^"]+)"[\s\S]*?<h2 class="project-title">([^<]+)</h2>[\s\S]*?<p class="project-tagline">([^<]+)</p>"#,
    )
    .expect("project block pattern is valid")
});

/// Extract project entries from the projects page, in page order.
///
/// The page carries no dates, so every project is stamped with `build_date`.
pub fn scrape_projects_page(html: &str, build_date: NaiveDate) -> Vec<Entry> {
    PROJECT_BLOCK
        .captures_iter(html)
        .map(|caps| {
            Entry::with_html(
                EntryKind::Project,
                &caps[1],
                &caps[2],
                build_date,
                Some(caps[3].to_string()),
                "",
                "",
            )
        })
        .collect()
}
