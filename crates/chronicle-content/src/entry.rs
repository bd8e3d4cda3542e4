//! The entry model shared by every artifact.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::date::format_display_date;
use crate::markdown::render_markdown;

/// The kind of content an [`Entry`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Post,
    Gist,
    Project,
}

impl EntryKind {
    /// Lowercase name used in URLs, logs and the search index.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Gist => "gist",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site-relative URL of an entry.
///
/// Posts get their own page; gists and projects are anchors on a listing page.
pub fn canonical_url(kind: EntryKind, slug: &str) -> String {
    match kind {
        EntryKind::Post => format!("posts/{}.html", slug),
        EntryKind::Gist => format!("gists.html#{}", slug),
        EntryKind::Project => format!("projects.html#{}", slug),
    }
}

/// A normalized content record.
///
/// Every derived field is computed in [`Entry::new`]; an entry never changes
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    kind: EntryKind,
    slug: String,
    title: String,
    date: NaiveDate,
    excerpt: String,
    body: String,
    html: String,
    display_date: String,
    url: String,
}

impl Entry {
    /// Create an entry, rendering `body` to HTML once.
    pub fn new(
        kind: EntryKind,
        slug: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        excerpt: Option<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let html = render_markdown(&body);
        Self::with_html(kind, slug, title, date, excerpt, body, html)
    }

    /// Create an entry whose HTML is already known (or irrelevant, as for
    /// projects scraped from an existing page).
    pub fn with_html(
        kind: EntryKind,
        slug: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        excerpt: Option<String>,
        body: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        let slug = slug.into();
        Self {
            url: canonical_url(kind, &slug),
            display_date: format_display_date(date),
            kind,
            slug,
            title: title.into(),
            date,
            excerpt: excerpt.unwrap_or_default(),
            body: body.into(),
            html: html.into(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Authored excerpt, or an empty string.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Raw Markdown body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body rendered to HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Date formatted as `Mon D, YYYY`.
    pub fn display_date(&self) -> &str {
        &self.display_date
    }

    /// Site-relative URL, see [`canonical_url`].
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Excerpt used when indexing for search. Gists without an excerpt are
    /// described by their title.
    pub fn search_excerpt(&self) -> &str {
        if self.kind == EntryKind::Gist && self.excerpt.is_empty() {
            &self.title
        } else {
            &self.excerpt
        }
    }
}

/// Anything ordered on the site timeline.
pub trait Dated {
    fn sort_date(&self) -> NaiveDate;
}

impl Dated for Entry {
    fn sort_date(&self) -> NaiveDate {
        self.date
    }
}

/// Sort newest first. Items sharing a date keep their relative order.
pub fn sort_descending_by_date<T: Dated>(items: &mut [T]) {
    items.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
}
