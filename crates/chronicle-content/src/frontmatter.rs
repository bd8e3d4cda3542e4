//! Frontmatter extraction and parsing.

use serde::Deserialize;

/// Parsed frontmatter from a content file.
///
/// Every field is optional at this layer; the loader decides which ones are
/// required for a given entry kind.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Entry title
    #[serde(default)]
    pub title: Option<String>,

    /// Publication date, as written
    #[serde(default)]
    pub date: Option<String>,

    /// Short summary shown in listings. Projects call it a tagline.
    #[serde(default, alias = "tagline")]
    pub excerpt: Option<String>,
}

/// Extract frontmatter from a content file.
///
/// Returns the parsed frontmatter and the remaining body after the
/// frontmatter block. A file that does not open with `---` has no
/// frontmatter and is returned whole.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    // Editors on some platforms prepend a byte order mark.
    let text = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some(after_open) = text.trim_start().strip_prefix("---") else {
        return Ok((None, text));
    };

    let (yaml, body) = after_open
        .split_once("\n---")
        .ok_or(FrontmatterError::Unclosed)?;

    let frontmatter = match yaml.trim() {
        "" => Frontmatter::default(),
        yaml => serde_yaml::from_str(yaml)
            .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?,
    };

    Ok((Some(frontmatter), body.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}
