//! `llms.txt`: a Markdown digest of the site for language models.

use chronicle_content::Entry;

use super::Artifact;
use crate::site::SiteInfo;

pub fn llms_summary(site: &SiteInfo, posts: &[Entry], gists: &[Entry]) -> Artifact {
    let mut out = format!("# {}\n\n> {}\n\n", site.title, site.description);

    if let Some(about) = &site.about {
        out.push_str(&format!("## About\n\n{}\n\n", about.trim()));
    }

    out.push_str(&format!("## Posts\n\n{}\n\n", link_list(site, posts)));
    out.push_str(&format!("## Gists\n\n{}\n\n", link_list(site, gists)));

    out.push_str(&format!("## Contact\n\n- Website: {}\n", site.url));
    for link in &site.contact {
        out.push_str(&format!("- {}: {}\n", link.label, link.value));
    }

    Artifact::new("llms.txt", out)
}

fn link_list(site: &SiteInfo, entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "- [{}]({}) - {}",
                entry.title(),
                site.absolute(entry.url()),
                entry.display_date()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::ContactLink;
    use chrono::NaiveDate;
    use chronicle_content::EntryKind;
    use pretty_assertions::assert_eq;

    fn entry(kind: EntryKind, slug: &str, title: &str) -> Entry {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        Entry::new(kind, slug, title, date, None, "")
    }

    #[test]
    fn lists_posts_and_gists_under_sections() {
        let site = SiteInfo {
            url: "https://notes.dev".to_string(),
            title: "Notes".to_string(),
            description: "things I learned".to_string(),
            about: Some("Written by a person.".to_string()),
            contact: vec![ContactLink {
                label: "GitHub".to_string(),
                value: "https://github.com/notes".to_string(),
            }],
        };
        let posts = vec![entry(EntryKind::Post, "hello", "Hello")];
        let gists = vec![entry(EntryKind::Gist, "tip", "Tip")];

        let artifact = llms_summary(&site, &posts, &gists);

        assert_eq!(artifact.path.to_str(), Some("llms.txt"));
        assert_eq!(
            artifact.contents,
            "# Notes

> things I learned

## About

Written by a person.

## Posts

- [Hello](https://notes.dev/posts/hello.html) - Mar 5, 2024

## Gists

- [Tip](https://notes.dev/gists.html#tip) - Mar 5, 2024

## Contact

- Website: https://notes.dev
- GitHub: https://github.com/notes
"
        );
    }

    #[test]
    fn empty_sections_and_no_about() {
        let site = SiteInfo {
            url: "https://notes.dev".to_string(),
            title: "Notes".to_string(),
            description: "d".to_string(),
            about: None,
            contact: vec![],
        };

        let artifact = llms_summary(&site, &[], &[]);

        assert_eq!(
            artifact.contents,
            "# Notes\n\n> d\n\n## Posts\n\n\n\n## Gists\n\n\n\n## Contact\n\n- Website: https://notes.dev\n"
        );
    }
}
