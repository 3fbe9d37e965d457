//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::CONFIG_FILE;

const CONFIG: &str = r#"# Content layout
site_path: content/site.md
tags_path: content/tags.md
posts_dir: content/posts
extension: md

# What to do with a post that fails to resolve: fail | skip
on_invalid_post: fail

# Pages
post_route: /coisas
featured: []
export_dir: public
"#;

const SITE: &str = r#"---
title: Dev
description: Where I keep the important things
---
"#;

const TAGS: &str = r#"---
general:
  value: General
  color: gold
---
"#;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    if target_dir.join(CONFIG_FILE).exists() {
        anyhow::bail!("{:?} already contains a {}", target_dir, CONFIG_FILE);
    }

    fs::create_dir_all(target_dir.join("content/posts"))?;

    fs::write(target_dir.join(CONFIG_FILE), CONFIG)?;
    fs::write(target_dir.join("content/site.md"), SITE)?;
    fs::write(target_dir.join("content/tags.md"), TAGS)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
description: The very first post
date: {}
tags:
  - general
---

Welcome! Create a new post with:

```bash
$ coisas new "My New Post" --tags general
```
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(target_dir.join("content/posts/hello-world.md"), sample_post)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blog;

    #[test]
    fn test_init_site_resolves() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.content().site().unwrap().title(), Some("Dev"));

        let posts = blog.content().posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug(), "hello-world");
        assert!(posts[0].meta.has_tag("General"));
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
