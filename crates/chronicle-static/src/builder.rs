//! Static site builder.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, NaiveDate};
use chronicle_content::{load_entries, load_projects, scrape_projects_page, Entry, EntryKind, LoadError};

use crate::emit::{self, Artifact};
use crate::site::SiteInfo;
use crate::templates::{Template, TemplateError};

/// Configuration for building a site.
///
/// Paths are used as given; callers resolve them against the project root.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Posts source directory
    pub posts_dir: PathBuf,

    /// Gists source directory
    pub gists_dir: PathBuf,

    /// Projects source directory (front-matter files)
    pub projects_dir: PathBuf,

    /// Hand-authored projects page, scraped when `projects_dir` is absent
    pub projects_page: PathBuf,

    /// Directory holding `post.html`, `index.html` and `gists.html`
    pub templates_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Site identity for the sitemap, robots and llms artifacts
    pub site: SiteInfo,

    /// Site-relative pages always listed in the sitemap
    pub static_pages: Vec<String>,

    /// Date stamped on projects that carry none
    pub build_date: NaiveDate,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("src/posts"),
            gists_dir: PathBuf::from("src/gists"),
            projects_dir: PathBuf::from("src/projects"),
            projects_page: PathBuf::from("projects.html"),
            templates_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("."),
            site: SiteInfo::default(),
            static_pages: default_static_pages(),
            build_date: Local::now().date_naive(),
        }
    }
}

/// Pages listed at the top of every sitemap.
pub fn default_static_pages() -> Vec<String> {
    ["", "about.html", "gists.html", "projects.html"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of posts rendered
    pub posts: usize,

    /// Number of gists rendered
    pub gists: usize,

    /// Number of projects indexed
    pub projects: usize,

    /// Every file written, in write order
    pub files: Vec<PathBuf>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// The steps of a build, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    LoadPosts,
    LoadGists,
    LoadProjects,
    PostPages,
    IndexPage,
    GistsPage,
    SearchIndex,
    Sitemap,
    Robots,
    LlmsSummary,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LoadPosts => "load posts",
            Self::LoadGists => "load gists",
            Self::LoadProjects => "load projects",
            Self::PostPages => "post pages",
            Self::IndexPage => "index page",
            Self::GistsPage => "gists page",
            Self::SearchIndex => "search index",
            Self::Sitemap => "sitemap",
            Self::Robots => "robots",
            Self::LlmsSummary => "llms summary",
        };
        f.write_str(name)
    }
}

/// A build step failed; nothing after it ran.
#[derive(Debug, thiserror::Error)]
#[error("Build failed at step '{stage}'")]
pub struct BuildError {
    pub stage: BuildStage,
    #[source]
    pub source: StageError,
}

/// What went wrong inside a build step.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to read projects page {}: {source}", path.display())]
    ProjectsPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize search index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the site: load every category once, then run the emitters in
    /// a fixed order against that model. The first failure stops the build;
    /// files already written are left in place.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let mut files = Vec::new();

        let posts = stage(BuildStage::LoadPosts, || {
            Ok(load_entries(&self.config.posts_dir, EntryKind::Post)?)
        })?;
        let gists = stage(BuildStage::LoadGists, || {
            Ok(load_entries(&self.config.gists_dir, EntryKind::Gist)?)
        })?;
        let projects = stage(BuildStage::LoadProjects, || self.load_projects())?;

        tracing::debug!(
            "Loaded {} posts, {} gists, {} projects",
            posts.len(),
            gists.len(),
            projects.len()
        );

        stage(BuildStage::PostPages, || {
            let template = self.template("post.html")?;
            self.write_all(emit::post_pages(&posts, &template), &mut files)?;
            tracing::info!("Generated {} posts", posts.len());
            Ok(())
        })?;

        stage(BuildStage::IndexPage, || {
            let template = self.template("index.html")?;
            self.write_all([emit::index_page(&posts, &template)], &mut files)?;
            tracing::info!("Generated index.html");
            Ok(())
        })?;

        stage(BuildStage::GistsPage, || {
            let template = self.template("gists.html")?;
            self.write_all([emit::gists_page(&gists, &template)], &mut files)?;
            tracing::info!("Generated gists.html with {} gists", gists.len());
            Ok(())
        })?;

        stage(BuildStage::SearchIndex, || {
            let (artifact, count) = emit::search_index(&posts, &gists, &projects)?;
            self.write_all([artifact], &mut files)?;
            tracing::info!("Generated search-index.json with {} entries", count);
            Ok(())
        })?;

        stage(BuildStage::Sitemap, || {
            let (artifact, count) = emit::sitemap(
                &self.config.site,
                &self.config.static_pages,
                &posts,
                &gists,
            );
            self.write_all([artifact], &mut files)?;
            tracing::info!("Generated sitemap.xml with {} urls", count);
            Ok(())
        })?;

        stage(BuildStage::Robots, || {
            self.write_all([emit::robots(&self.config.site)], &mut files)?;
            tracing::info!("Generated robots.txt");
            Ok(())
        })?;

        stage(BuildStage::LlmsSummary, || {
            let artifact = emit::llms_summary(&self.config.site, &posts, &gists);
            self.write_all([artifact], &mut files)?;
            tracing::info!("Generated llms.txt");
            Ok(())
        })?;

        let duration = start.elapsed();

        Ok(BuildResult {
            posts: posts.len(),
            gists: gists.len(),
            projects: projects.len(),
            files,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Load projects from front-matter files, falling back to scraping the
    /// projects page. Neither source existing means no projects.
    fn load_projects(&self) -> Result<Vec<Entry>, StageError> {
        let build_date = self.config.build_date;

        if self.config.projects_dir.is_dir() {
            return Ok(load_projects(&self.config.projects_dir, build_date)?);
        }

        let page = &self.config.projects_page;
        if !page.is_file() {
            tracing::debug!("No projects source at {}", page.display());
            return Ok(Vec::new());
        }

        let html = fs::read_to_string(page).map_err(|source| StageError::ProjectsPage {
            path: page.clone(),
            source,
        })?;

        let projects = scrape_projects_page(&html, build_date);
        if projects.is_empty() {
            tracing::warn!("No project blocks matched in {}", page.display());
        }

        Ok(projects)
    }

    fn template(&self, name: &str) -> Result<Template, TemplateError> {
        Template::load(&self.config.templates_dir.join(name))
    }

    fn write_all(
        &self,
        artifacts: impl IntoIterator<Item = Artifact>,
        files: &mut Vec<PathBuf>,
    ) -> Result<(), StageError> {
        for artifact in artifacts {
            let path = artifact
                .write(&self.config.output_dir)
                .map_err(|source| StageError::Write {
                    path: self.config.output_dir.join(&artifact.path),
                    source,
                })?;
            tracing::debug!("Wrote {}", path.display());
            files.push(path);
        }

        Ok(())
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }
}

/// Run one build step, tagging any failure with the step.
fn stage<T>(
    stage: BuildStage,
    step: impl FnOnce() -> Result<T, StageError>,
) -> Result<T, BuildError> {
    step().map_err(|source| {
        tracing::error!("Step '{}' failed: {}", stage, source);
        BuildError { stage, source }
    })
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// A project with templates and no content.
    fn project() -> TempDir {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write(
            &root.join("templates/post.html"),
            "<h1>{{TITLE}}</h1><time>{{DATE}}</time>{{CONTENT}}",
        );
        write(&root.join("templates/index.html"), "<ol>\n{{TIMELINE}}\n</ol>");
        write(&root.join("templates/gists.html"), "<section>{{GISTS}}</section>");
        temp
    }

    fn config(root: &Path) -> BuildConfig {
        let defaults = BuildConfig::default();
        BuildConfig {
            posts_dir: root.join(defaults.posts_dir),
            gists_dir: root.join(defaults.gists_dir),
            projects_dir: root.join(defaults.projects_dir),
            projects_page: root.join(defaults.projects_page),
            templates_dir: root.join(defaults.templates_dir),
            output_dir: root.to_path_buf(),
            site: SiteInfo {
                url: "https://notes.dev".to_string(),
                ..Default::default()
            },
            static_pages: default_static_pages(),
            build_date: ymd(2025, 1, 15),
        }
    }

    fn add_scenario_content(root: &Path) {
        write(
            &root.join("src/posts/a.md"),
            "---\ntitle: A\ndate: 2024-01-01\nexcerpt: First post\n---\nAlpha body",
        );
        write(
            &root.join("src/posts/b.md"),
            "---\ntitle: B\ndate: 2024-06-01\n---\n```rust\nfn main() {}\n```\n",
        );
        write(
            &root.join("src/gists/tip.md"),
            "---\ntitle: Shell tip\ndate: 2024-03-01\n---\nUse `set -e`.",
        );
        write(
            &root.join("src/projects/chronicle.md"),
            "---\ntitle: chronicle\ntagline: Static sites\n---\n",
        );
    }

    fn read(root: &Path, path: &str) -> String {
        fs::read_to_string(root.join(path)).unwrap()
    }

    fn search_urls(root: &Path) -> Vec<String> {
        let index: serde_json::Value = serde_json::from_str(&read(root, "search-index.json")).unwrap();
        index
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["url"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn builds_simple_site() {
        let temp = project();
        let root = temp.path();
        add_scenario_content(root);

        let result = StaticBuilder::new(config(root)).build().unwrap();

        assert_eq!(result.posts, 2);
        assert_eq!(result.gists, 1);
        assert_eq!(result.projects, 1);
        // two files per post, then six single-file artifacts
        assert_eq!(result.files.len(), 10);
        for file in [
            "posts/a.html",
            "posts/a/index.html",
            "posts/b.html",
            "posts/b/index.html",
            "index.html",
            "gists.html",
            "search-index.json",
            "sitemap.xml",
            "robots.txt",
            "llms.txt",
        ] {
            assert!(root.join(file).is_file(), "missing {file}");
        }
    }

    #[test]
    fn orders_newer_posts_first_everywhere() {
        let temp = project();
        let root = temp.path();
        add_scenario_content(root);

        StaticBuilder::new(config(root)).build().unwrap();

        let index = read(root, "index.html");
        let b = index.find("posts/b.html").unwrap();
        let a = index.find("posts/a.html").unwrap();
        assert!(b < a);

        assert_eq!(
            search_urls(root),
            [
                "projects.html#chronicle",
                "posts/b.html",
                "gists.html#tip",
                "posts/a.html",
            ]
        );
    }

    #[test]
    fn post_urls_agree_across_artifacts() {
        let temp = project();
        let root = temp.path();
        add_scenario_content(root);

        StaticBuilder::new(config(root)).build().unwrap();

        let index = read(root, "index.html");
        let sitemap = read(root, "sitemap.xml");
        let search = search_urls(root);
        for slug in ["a", "b"] {
            let url = format!("posts/{slug}.html");
            assert!(index.contains(&format!("href=\"{url}\"")));
            assert!(search.contains(&url));
            assert!(sitemap.contains(&format!("<loc>https://notes.dev/{url}</loc>")));
        }
        assert!(sitemap.contains("<loc>https://notes.dev/gists.html#tip</loc>"));
    }

    #[test]
    fn post_page_forms_are_identical() {
        let temp = project();
        let root = temp.path();
        add_scenario_content(root);

        StaticBuilder::new(config(root)).build().unwrap();

        for slug in ["a", "b"] {
            let flat = fs::read(root.join(format!("posts/{slug}.html"))).unwrap();
            let nested = fs::read(root.join(format!("posts/{slug}/index.html"))).unwrap();
            assert_eq!(flat, nested);
        }
        assert_eq!(
            read(root, "posts/a.html"),
            "<h1>A</h1><time>Jan 1, 2024</time><p>Alpha body</p>\n"
        );
        assert!(read(root, "posts/b.html")
            .contains("<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"));
    }

    #[test]
    fn gist_without_excerpt_is_indexed_by_title() {
        let temp = project();
        let root = temp.path();
        add_scenario_content(root);

        StaticBuilder::new(config(root)).build().unwrap();

        let index: serde_json::Value =
            serde_json::from_str(&read(root, "search-index.json")).unwrap();
        let gist = index
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["type"] == "gist")
            .unwrap();
        assert_eq!(gist["excerpt"], "Shell tip");
        assert_eq!(gist["date"], "Mar 1, 2024");

        let project = &index[0];
        assert_eq!(project["type"], "project");
        assert_eq!(project["excerpt"], "Static sites");
        assert_eq!(project["date"], "Jan 15, 2025");
    }

    #[test]
    fn empty_categories_still_generate_pages() {
        let temp = project();
        let root = temp.path();

        let result = StaticBuilder::new(config(root)).build().unwrap();

        assert_eq!(result.posts, 0);
        assert_eq!(read(root, "index.html"), "<ol>\n\n</ol>");
        assert_eq!(read(root, "gists.html"), "<section></section>");
        assert_eq!(read(root, "search-index.json"), "[]");
        assert!(!root.join("posts").exists());
    }

    #[test]
    fn scrapes_projects_page_without_projects_dir() {
        let temp = project();
        let root = temp.path();
        write(
            &root.join("projects.html"),
            r#"<article class="project" id="kiln">
  <h2 class="project-title">kiln</h2>
  <p class="project-tagline">Bakes fonts</p>
</article>"#,
        );

        let result = StaticBuilder::new(config(root)).build().unwrap();

        assert_eq!(result.projects, 1);
        assert_eq!(search_urls(root), ["projects.html#kiln"]);
        // the hand-authored page is read, never rewritten
        assert!(read(root, "projects.html").starts_with("<article"));
    }

    #[test]
    fn rebuilding_is_byte_identical() {
        let temp = project();
        let root = temp.path();
        add_scenario_content(root);
        let builder = StaticBuilder::new(config(root));

        let first = builder.build().unwrap();
        let snapshot: Vec<Vec<u8>> = first.files.iter().map(|f| fs::read(f).unwrap()).collect();
        let second = builder.build().unwrap();

        assert_eq!(first.files, second.files);
        let again: Vec<Vec<u8>> = second.files.iter().map(|f| fs::read(f).unwrap()).collect();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn invalid_post_stops_the_build() {
        let temp = project();
        let root = temp.path();
        write(&root.join("src/posts/broken.md"), "---\ndate: 2024-01-01\n---\n");

        let err = StaticBuilder::new(config(root)).build().unwrap_err();

        assert_eq!(err.stage, BuildStage::LoadPosts);
        assert!(matches!(err.source, StageError::Load(LoadError::MissingField { .. })));
        assert!(err.source.to_string().contains("broken.md"));
        assert!(!root.join("index.html").exists());
    }

    #[test]
    fn missing_template_names_the_step() {
        let temp = project();
        let root = temp.path();
        add_scenario_content(root);
        fs::remove_file(root.join("templates/gists.html")).unwrap();

        let err = StaticBuilder::new(config(root)).build().unwrap_err();

        assert_eq!(err.stage, BuildStage::GistsPage);
        assert_eq!(err.to_string(), "Build failed at step 'gists page'");
        // earlier steps already wrote their files, later ones never ran
        assert!(root.join("index.html").exists());
        assert!(!root.join("search-index.json").exists());
    }

    #[test]
    fn resolves_relative_paths_against_root() {
        let root = Path::new("/site");

        assert_eq!(resolve(root, Path::new("src/posts")), PathBuf::from("/site/src/posts"));
        assert_eq!(resolve(root, Path::new("/abs")), PathBuf::from("/abs"));
    }
}
