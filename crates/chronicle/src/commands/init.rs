//! Scaffold a new site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chronicle_static::resolve;

/// Files written by `init`, relative to the project root. The config path is
/// chosen on the command line and handled separately.
const SCAFFOLD: [(&str, &str); 6] = [
    ("templates/post.html", DEFAULT_POST_TEMPLATE),
    ("templates/index.html", DEFAULT_INDEX_TEMPLATE),
    ("templates/gists.html", DEFAULT_GISTS_TEMPLATE),
    ("src/posts/hello-world.md", DEFAULT_POST),
    ("src/gists/first-gist.md", DEFAULT_GIST),
    ("src/projects/chronicle.md", DEFAULT_PROJECT),
];

/// Run the init command.
pub fn run(root: &Path, config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing site in {}...", root.display());

    let config_path = resolve(root, config_path);
    write_scaffold_file(&config_path, DEFAULT_CONFIG, yes)?;

    for (relative, contents) in SCAFFOLD {
        write_scaffold_file(&root.join(relative), contents, yes)?;
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'chronicle build' to generate the site.");

    Ok(())
}

/// Write one file unless it already exists and `overwrite` is false.
fn write_scaffold_file(path: &Path, contents: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"[site]
url = "https://example.com"
title = "Notebook"
description = "notes on software, systems, and tools"
about = "A personal site built with chronicle."

# [[site.contact]]
# label = "GitHub"
# value = "https://github.com/you"

[content]
posts = "src/posts"
gists = "src/gists"
projects = "src/projects"
templates = "templates"

[build]
output = "."
"#;

const DEFAULT_POST_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{TITLE}}</title>
</head>
<body>
  <main class="post">
    <header>
      <h1 class="post-title">{{TITLE}}</h1>
      <time class="post-date">{{DATE}}</time>
    </header>
    <article class="post-content">
{{CONTENT}}
    </article>
  </main>
</body>
</html>
"##;

const DEFAULT_INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Notebook</title>
</head>
<body>
  <main>
    <section class="timeline">
{{TIMELINE}}
    </section>
  </main>
</body>
</html>
"##;

const DEFAULT_GISTS_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Gists</title>
</head>
<body>
  <main>
    <section class="gists">
{{GISTS}}
    </section>
  </main>
</body>
</html>
"##;

const DEFAULT_POST: &str = r#"---
title: Hello, world
date: 2024-01-01
excerpt: The first post on this site.
---

Welcome! Posts live in `src/posts`, one Markdown file each.

```rust
fn main() {
    println!("hello");
}
```
"#;

const DEFAULT_GIST: &str = r#"---
title: Undo the last commit
date: 2024-01-02
---

```sh
git reset --soft HEAD~1
```
"#;

const DEFAULT_PROJECT: &str = r#"---
title: chronicle
tagline: Builds this site from Markdown
---
"#;
