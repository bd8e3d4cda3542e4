//! Content discovery: one directory per category, one entry per file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use walkdir::WalkDir;

use crate::date::{parse_date, DateError};
use crate::entry::{sort_descending_by_date, Entry, EntryKind};
use crate::frontmatter::{extract_frontmatter, FrontmatterError};

/// File extensions recognized as content.
const CONTENT_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Errors that can occur while loading a content category.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to list {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed frontmatter in {}: {source}", path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    #[error("Missing required field '{field}' in {}", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("Invalid date in {}: {source}", path.display())]
    InvalidDate {
        path: PathBuf,
        #[source]
        source: DateError,
    },

    #[error("File name of {} is not a usable slug", path.display())]
    InvalidSlug { path: PathBuf },

    #[error("Duplicate slug '{slug}' in {}", path.display())]
    DuplicateSlug { path: PathBuf, slug: String },
}

/// Load every post or gist directly inside `dir`.
///
/// A missing directory yields no entries. The result is sorted newest first;
/// files sharing a date stay in file-name order.
pub fn load_entries(dir: &Path, kind: EntryKind) -> Result<Vec<Entry>, LoadError> {
    load_dir(dir, kind, None)
}

/// Load projects directly inside `dir`.
///
/// Projects have no required date; those without one are stamped with
/// `build_date`.
pub fn load_projects(dir: &Path, build_date: NaiveDate) -> Result<Vec<Entry>, LoadError> {
    load_dir(dir, EntryKind::Project, Some(build_date))
}

fn load_dir(
    dir: &Path,
    kind: EntryKind,
    default_date: Option<NaiveDate>,
) -> Result<Vec<Entry>, LoadError> {
    if !dir.is_dir() {
        tracing::debug!("No {} directory at {}", kind, dir.display());
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for item in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let item = item.map_err(|source| LoadError::ListDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = item.path();

        if !item.file_type().is_file() || !is_content_file(path) {
            tracing::debug!("Skipping {}", path.display());
            continue;
        }

        let entry = load_file(path, kind, default_date)?;

        if !seen.insert(entry.slug().to_string()) {
            return Err(LoadError::DuplicateSlug {
                path: path.to_path_buf(),
                slug: entry.slug().to_string(),
            });
        }

        entries.push(entry);
    }

    sort_descending_by_date(&mut entries);

    Ok(entries)
}

fn load_file(
    path: &Path,
    kind: EntryKind,
    default_date: Option<NaiveDate>,
) -> Result<Entry, LoadError> {
    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| is_valid_slug(s))
        .ok_or_else(|| LoadError::InvalidSlug {
            path: path.to_path_buf(),
        })?;

    let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (frontmatter, body) =
        extract_frontmatter(&source).map_err(|source| LoadError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;
    let frontmatter = frontmatter.unwrap_or_default();

    let title = frontmatter
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| LoadError::MissingField {
            path: path.to_path_buf(),
            field: "title",
        })?;

    let date = match (frontmatter.date, default_date) {
        (Some(raw), _) => parse_date(&raw).map_err(|source| LoadError::InvalidDate {
            path: path.to_path_buf(),
            source,
        })?,
        (None, Some(date)) => date,
        (None, None) => {
            return Err(LoadError::MissingField {
                path: path.to_path_buf(),
                field: "date",
            })
        }
    };

    Ok(Entry::new(kind, slug, title, date, frontmatter.excerpt, body))
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

/// Slugs become file names and URL fragments, so keep them plain ASCII.
/// A leading dot would allow `.` and `..`, which escape `posts/`.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}
