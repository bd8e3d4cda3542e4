//! Site-wide metadata used by the sitemap, robots and llms artifacts.

/// Identity of the published site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteInfo {
    /// Absolute base URL without a trailing slash
    pub url: String,
    /// Site title
    pub title: String,
    /// One-line description
    pub description: String,
    /// Optional paragraph for the llms summary's About section
    pub about: Option<String>,
    /// Contact links listed after the website
    pub contact: Vec<ContactLink>,
}

/// A labelled contact line, e.g. `GitHub: https://github.com/someone`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
}

impl SiteInfo {
    /// Absolute URL for a site-relative path.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), path)
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            url: "https://example.com".to_string(),
            title: "Notebook".to_string(),
            description: "notes on software, systems, and tools".to_string(),
            about: None,
            contact: vec![],
        }
    }
}
