//! `sitemap.xml` and `robots.txt`.

use chronicle_content::{html_escape, Entry};

use super::Artifact;
use crate::site::SiteInfo;

/// Render `sitemap.xml`: the static pages, then every post, then every gist
/// anchor. Locations only, no optional fields.
pub fn sitemap(
    site: &SiteInfo,
    static_pages: &[String],
    posts: &[Entry],
    gists: &[Entry],
) -> (Artifact, usize) {
    let urls: Vec<String> = static_pages
        .iter()
        .map(String::as_str)
        .chain(posts.iter().map(Entry::url))
        .chain(gists.iter().map(Entry::url))
        .map(|path| {
            format!(
                "  <url>\n    <loc>{}</loc>\n  </url>",
                html_escape(&site.absolute(path))
            )
        })
        .collect();

    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
        urls.join("\n")
    );

    (Artifact::new("sitemap.xml", xml), urls.len())
}

/// Render `robots.txt`: allow everything and point at the sitemap.
pub fn robots(site: &SiteInfo) -> Artifact {
    let robots = format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        site.absolute("sitemap.xml")
    );

    Artifact::new("robots.txt", robots)
}
