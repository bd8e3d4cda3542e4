//! HTML pages: one per post, the index timeline and the gists listing.

use std::path::PathBuf;

use chronicle_content::{html_escape, Entry};

use super::Artifact;
use crate::templates::{Substitutions, Template};

/// Render every post twice: `posts/{slug}.html` and `posts/{slug}/index.html`
/// carry the same bytes so both URL styles resolve.
pub fn post_pages(posts: &[Entry], template: &Template) -> Vec<Artifact> {
    let mut artifacts = Vec::with_capacity(posts.len() * 2);

    for post in posts {
        let title = html_escape(post.title());
        let html = template.render(
            &Substitutions::new()
                .with("TITLE", &title)
                .with("DATE", post.display_date())
                .with("CONTENT", post.html()),
        );

        artifacts.push(Artifact::new(
            PathBuf::from("posts").join(format!("{}.html", post.slug())),
            html.clone(),
        ));
        artifacts.push(Artifact::new(
            PathBuf::from("posts").join(post.slug()).join("index.html"),
            html,
        ));
    }

    artifacts
}

/// Render `index.html` with the posts timeline, in the order given.
pub fn index_page(posts: &[Entry], template: &Template) -> Artifact {
    let timeline = posts
        .iter()
        .map(timeline_item)
        .collect::<Vec<_>>()
        .join("\n\n");

    Artifact::new(
        "index.html",
        template.render(&Substitutions::new().with("TIMELINE", &timeline)),
    )
}

/// Render `gists.html` with one anchored block per gist, in the order given.
pub fn gists_page(gists: &[Entry], template: &Template) -> Artifact {
    let blocks = gists
        .iter()
        .map(gist_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    Artifact::new(
        "gists.html",
        template.render(&Substitutions::new().with("GISTS", &blocks)),
    )
}

fn timeline_item(post: &Entry) -> String {
    format!(
        r#"      <article class="timeline-item">
        <time class="timeline-date">{date}</time>
        <h2 class="timeline-title">
          <a href="{url}">{title}</a>
        </h2>
        <p class="timeline-excerpt">{excerpt}</p>
      </article>"#,
        date = post.display_date(),
        url = post.url(),
        title = html_escape(post.title()),
        excerpt = html_escape(post.excerpt()),
    )
}

fn gist_block(gist: &Entry) -> String {
    format!(
        r#"      <article class="gist" id="{slug}">
        <header class="gist-header">
          <h2 class="gist-title">{title}</h2>
          <time class="gist-date">{date}</time>
        </header>
        <div class="gist-content">
          {html}
        </div>
      </article>"#,
        slug = gist.slug(),
        title = html_escape(gist.title()),
        date = gist.display_date(),
        html = gist.html(),
    )
}
