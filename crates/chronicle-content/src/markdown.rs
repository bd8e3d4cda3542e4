//! Markdown to HTML rendering.

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render a Markdown body to HTML.
///
/// Code blocks are emitted as `<pre><code class="language-{lang}">` with the
/// first word of the fence info string as `lang` (`text` when absent), so
/// the client-side highlighter can find them.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options);

    let mut events = Vec::new();
    let mut current_code_block: Option<(String, String)> = None; // (language, text)

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or(""),
                    CodeBlockKind::Indented => "",
                };
                let language = if language.is_empty() { "text" } else { language };
                current_code_block = Some((language.to_string(), String::new()));
            }

            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, text)) = current_code_block.take() {
                    let block = format!(
                        "<pre><code class=\"language-{}\">{}</code></pre>\n",
                        html_escape(&language),
                        html_escape(&text)
                    );
                    events.push(Event::Html(CowStr::from(block)));
                }
            }

            Event::Text(text) => match current_code_block {
                Some((_, ref mut code)) => code.push_str(&text),
                None => events.push(Event::Text(text)),
            },

            other => {
                if current_code_block.is_none() {
                    events.push(other);
                }
            }
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    html_output
}

/// Escape HTML special characters, including both quote styles.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_paragraphs_and_headings() {
        let html = render_markdown("# Title\n\nSome *text*.");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some <em>text</em>.</p>"));
    }

    #[test]
    fn tags_fenced_code_with_language() {
        let html = render_markdown("```rust ignore\nlet x = 1 < 2;\n```\n");

        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">let x = 1 &lt; 2;\n</code></pre>\n"
        );
    }

    #[test]
    fn defaults_code_language_to_text() {
        let fenced = render_markdown("```\necho \"hi\"\n```\n");
        let indented = render_markdown("    plain block\n");

        assert!(fenced.contains("<code class=\"language-text\">echo &quot;hi&quot;\n</code>"));
        assert!(indented.contains("<code class=\"language-text\">plain block\n</code>"));
    }

    #[test]
    fn renders_gfm_extensions() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done\n");

        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn soft_breaks_stay_newlines() {
        let html = render_markdown("one\ntwo");

        assert_eq!(html, "<p>one\ntwo</p>\n");
    }

    #[test]
    fn escapes_html_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }
}
