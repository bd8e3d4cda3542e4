//! Content loading and the entry model for chronicle.
//!
//! This crate discovers Markdown files with YAML front-matter, renders their
//! bodies to HTML, and turns them into immutable [`Entry`] records shared by
//! every artifact the site build emits.

pub mod date;
pub mod entry;
pub mod frontmatter;
pub mod loader;
pub mod markdown;
pub mod projects;

pub use date::{format_display_date, parse_date, DateError};
pub use entry::{canonical_url, sort_descending_by_date, Dated, Entry, EntryKind};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use loader::{load_entries, load_projects, LoadError};
pub use markdown::{html_escape, render_markdown};
pub use projects::scrape_projects_page;
