//! Artifact emitters.
//!
//! Each emitter is a pure function from the loaded entries to the file(s) it
//! produces. Nothing here touches the filesystem except [`Artifact::write`].

pub mod llms;
pub mod pages;
pub mod search;
pub mod sitemap;

use std::fs;
use std::path::{Path, PathBuf};

pub use llms::llms_summary;
pub use pages::{gists_page, index_page, post_pages};
pub use search::{build_search_index, search_index, SearchIndexEntry};
pub use sitemap::{robots, sitemap};

/// A generated output file, addressed relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Write the artifact under `output_dir`, creating parent directories.
    ///
    /// Returns the full path written.
    pub fn write(&self, output_dir: &Path) -> std::io::Result<PathBuf> {
        let target = output_dir.join(&self.path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&target, &self.contents)?;

        Ok(target)
    }
}
