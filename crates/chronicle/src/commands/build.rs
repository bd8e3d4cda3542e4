//! Static site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use chronicle_content::parse_date;
use chronicle_static::{
    default_static_pages, resolve, BuildConfig, ContactLink, SiteInfo, StaticBuilder,
};
use serde::Deserialize;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SiteConfig {
    url: String,
    title: String,
    description: String,
    about: Option<String>,
    contact: Vec<ContactConfig>,
}

#[derive(Debug, Deserialize)]
struct ContactConfig {
    label: String,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ContentConfig {
    posts: PathBuf,
    gists: PathBuf,
    projects: PathBuf,
    projects_page: PathBuf,
    templates: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct BuildSettings {
    output: PathBuf,
    static_pages: Vec<String>,
    /// Pins the date stamped on undated projects
    build_date: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let site = SiteInfo::default();
        Self {
            url: site.url,
            title: site.title,
            description: site.description,
            about: None,
            contact: vec![],
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        let defaults = BuildConfig::default();
        Self {
            posts: defaults.posts_dir,
            gists: defaults.gists_dir,
            projects: defaults.projects_dir,
            projects_page: defaults.projects_page,
            templates: defaults.templates_dir,
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            static_pages: default_static_pages(),
            build_date: None,
        }
    }
}

/// Load configuration from the config file if it exists.
/// Returns an error if the config file exists but is malformed.
pub(crate) fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

/// Turn the config file plus command-line overrides into a [`BuildConfig`]
/// rooted at `root`.
fn build_config(
    root: &Path,
    file_config: ConfigFile,
    output: Option<PathBuf>,
    build_date: Option<NaiveDate>,
) -> Result<BuildConfig> {
    let build_date = match (build_date, file_config.build.build_date) {
        (Some(date), _) => date,
        (None, Some(raw)) => parse_date(&raw).context("Invalid build.build_date")?,
        (None, None) => Local::now().date_naive(),
    };

    let content = file_config.content;
    let site = file_config.site;

    Ok(BuildConfig {
        posts_dir: resolve(root, &content.posts),
        gists_dir: resolve(root, &content.gists),
        projects_dir: resolve(root, &content.projects),
        projects_page: resolve(root, &content.projects_page),
        templates_dir: resolve(root, &content.templates),
        output_dir: resolve(root, &output.unwrap_or(file_config.build.output)),
        site: SiteInfo {
            url: site.url.trim_end_matches('/').to_string(),
            title: site.title,
            description: site.description,
            about: site.about,
            contact: site
                .contact
                .into_iter()
                .map(|c| ContactLink {
                    label: c.label,
                    value: c.value,
                })
                .collect(),
        },
        static_pages: file_config.build.static_pages,
        build_date,
    })
}

/// Run the build command.
pub fn run(
    root: &Path,
    config_path: &Path,
    output: Option<PathBuf>,
    build_date: Option<NaiveDate>,
) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = load_config(&resolve(root, config_path))?;
    let config = build_config(root, file_config, output, build_date)?;

    let result = StaticBuilder::new(config).build()?;

    tracing::info!(
        "Built {} posts, {} gists and {} projects into {} files in {}ms",
        result.posts,
        result.gists,
        result.projects,
        result.files.len(),
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
