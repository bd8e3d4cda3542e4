//! `search-index.json`, consumed by the client-side search widget.

use chrono::NaiveDate;
use chronicle_content::{sort_descending_by_date, Dated, Entry, EntryKind};
use serde::Serialize;

use super::Artifact;

/// One searchable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchIndexEntry<'a> {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub title: &'a str,
    pub excerpt: &'a str,
    /// Display date, e.g. `Mar 5, 2024`
    pub date: &'a str,
    pub url: &'a str,
    #[serde(skip)]
    sort_date: NaiveDate,
}

impl<'a> From<&'a Entry> for SearchIndexEntry<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            kind: entry.kind(),
            title: entry.title(),
            excerpt: entry.search_excerpt(),
            date: entry.display_date(),
            url: entry.url(),
            sort_date: entry.date(),
        }
    }
}

impl Dated for SearchIndexEntry<'_> {
    fn sort_date(&self) -> NaiveDate {
        self.sort_date
    }
}

/// Merge projects, posts and gists, newest first.
///
/// Records sharing a date keep that kind order, then their input order.
pub fn build_search_index<'a>(
    posts: &'a [Entry],
    gists: &'a [Entry],
    projects: &'a [Entry],
) -> Vec<SearchIndexEntry<'a>> {
    let mut index: Vec<SearchIndexEntry<'a>> = projects
        .iter()
        .chain(posts)
        .chain(gists)
        .map(SearchIndexEntry::from)
        .collect();

    sort_descending_by_date(&mut index);

    index
}

/// Render `search-index.json` as pretty-printed JSON.
pub fn search_index(
    posts: &[Entry],
    gists: &[Entry],
    projects: &[Entry],
) -> Result<(Artifact, usize), serde_json::Error> {
    let index = build_search_index(posts, gists, projects);
    let json = serde_json::to_string_pretty(&index)?;

    Ok((Artifact::new("search-index.json", json), index.len()))
}
