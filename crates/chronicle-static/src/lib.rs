//! Static site builder for chronicle.
//!
//! Turns the loaded posts, gists and projects into the site's artifacts:
//! post pages, the index timeline, the gists page, the search index, the
//! sitemap, `robots.txt` and `llms.txt`.

pub mod builder;
pub mod emit;
pub mod site;
pub mod templates;

pub use builder::{
    default_static_pages, resolve, BuildConfig, BuildError, BuildResult, BuildStage, StageError,
    StaticBuilder,
};
pub use emit::Artifact;
pub use site::{ContactLink, SiteInfo};
pub use templates::{render_template, Substitutions, Template, TemplateError};
