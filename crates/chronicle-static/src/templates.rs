//! Page templates with `{{NAME}}` placeholders.
//!
//! Rendering is a single literal substitution pass: each known placeholder
//! is replaced by its value, unknown ones are left as written, and
//! substituted values are never scanned again.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is valid")
});

/// Values for named placeholders.
#[derive(Debug, Clone, Default)]
pub struct Substitutions<'a> {
    values: HashMap<&'a str, &'a str>,
}

impl<'a> Substitutions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for `{{name}}`.
    pub fn with(mut self, name: &'a str, value: &'a str) -> Self {
        self.values.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).copied()
    }
}

/// Replace every known placeholder in `template`.
pub fn render_template(template: &str, substitutions: &Substitutions<'_>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            match substitutions.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// A template loaded from disk.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    source: String,
}

impl Template {
    /// Read a template file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = fs::read_to_string(path).map_err(|source| TemplateError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_source(path, source))
    }

    /// Wrap template text that is already in memory.
    pub fn from_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(&self, substitutions: &Substitutions<'_>) -> String {
        render_template(&self.source, substitutions)
    }
}

/// A template file could not be read.
#[derive(Debug, thiserror::Error)]
#[error("Failed to read template {}: {source}", path.display())]
pub struct TemplateError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
