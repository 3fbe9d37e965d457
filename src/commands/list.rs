//! List site content

use anyhow::Result;

use crate::content::{Post, TagDictionary};
use crate::helpers::{card_description, filter_by_tag, tag_counts};
use crate::Blog;

/// List site content by type, optionally narrowing posts to one tag
pub fn run(blog: &Blog, content_type: &str, tag: Option<&str>) -> Result<()> {
    let content = blog.content();

    if tag.is_some() && !matches!(content_type, "post" | "posts") {
        anyhow::bail!("--tag only applies when listing posts");
    }

    match content_type {
        "post" | "posts" => {
            let all = content.posts()?;
            let posts = match tag {
                Some(tag) => posts_for_listing(&all, tag, &content.tags()?),
                None => all.iter().collect(),
            };
            println!("Posts ({}):", posts.len());
            for post in posts {
                let tags: Vec<_> = post
                    .meta
                    .tags
                    .iter()
                    .map(|t| t.as_ref().map_or("?", |t| t.value.as_str()))
                    .collect();
                println!("  {} [{}] ({})", post.title(), post.slug(), tags.join(", "));
                if let Some(description) = &post.meta.description {
                    println!("    {}", card_description(description));
                }
            }
        }
        "slug" | "slugs" => {
            let mut slugs = content.post_slugs()?;
            slugs.sort();
            for slug in slugs {
                println!("{}", slug);
            }
        }
        "tag" | "tags" => {
            let tags = content.tags()?;
            let posts = content.posts()?;
            println!("Tags ({}):", tags.len());
            for ((id, tag), (_, count)) in tags.iter().zip(tag_counts(&tags, &posts)) {
                println!(
                    "  {} = {} [{}] ({})",
                    id,
                    tag.value,
                    tag.color.as_deref().unwrap_or("-"),
                    count
                );
            }
        }
        "site" => {
            let site = content.site()?;
            for (key, value) in &site.0 {
                let value = serde_yaml::to_string(value)?;
                println!("  {}: {}", key, value.trim_end());
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, slug, tag, site",
                content_type
            );
        }
    }

    Ok(())
}

/// Posts shown for a tag filter. The filter is the tag's display value, or
/// a dictionary identifier standing for it.
pub fn posts_for_listing<'a>(
    posts: &'a [Post],
    tag: &str,
    tags: &TagDictionary,
) -> Vec<&'a Post> {
    let value = tags.get(tag).map_or(tag, |descriptor| descriptor.value.as_str());
    filter_by_tag(posts, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TagDescriptor;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("content/posts")).unwrap();
        fs::write(root.join("content/site.md"), "---\ntitle: Dev\n---\n").unwrap();
        fs::write(
            root.join("content/tags.md"),
            "---\njs:\n  value: JavaScript\noop:\n  value: OOP\n---\n",
        )
        .unwrap();
        let posts = [
            ("solid", "[oop]"),
            ("closures", "[js]"),
            ("classes", "[js, oop]"),
        ];
        for (slug, tags) in posts {
            fs::write(
                root.join(format!("content/posts/{}.md", slug)),
                format!("---\ntags: {}\n---\nBody\n", tags),
            )
            .unwrap();
        }
        dir
    }

    fn sorted_slugs(posts: Vec<&Post>) -> Vec<&str> {
        let mut slugs: Vec<_> = posts.into_iter().map(Post::slug).collect();
        slugs.sort();
        slugs
    }

    #[test]
    fn test_posts_for_listing_by_value_or_identifier() {
        let dir = fixture();
        let blog = Blog::new(dir.path()).unwrap();
        let posts = blog.content().posts().unwrap();
        let tags = blog.content().tags().unwrap();

        let by_value = posts_for_listing(&posts, "JavaScript", &tags);
        assert_eq!(sorted_slugs(by_value), vec!["classes", "closures"]);

        let by_id = posts_for_listing(&posts, "oop", &tags);
        assert_eq!(sorted_slugs(by_id), vec!["classes", "solid"]);

        assert!(posts_for_listing(&posts, "Rust", &tags).is_empty());
    }

    #[test]
    fn test_posts_for_listing_ignores_dangling() {
        let mut tags = TagDictionary::new();
        tags.insert("go".to_string(), TagDescriptor::new("Go", None));
        let dir = fixture();
        fs::write(
            dir.path().join("content/posts/orphan.md"),
            "---\ntags: [go]\n---\nBody\n",
        )
        .unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let posts = blog.content().posts().unwrap();

        // `go` is missing from the site dictionary, so the post resolved a null tag
        assert!(posts_for_listing(&posts, "go", &tags).is_empty());
    }

    #[test]
    fn test_run_rejects_tag_outside_posts() {
        let dir = fixture();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(run(&blog, "slug", Some("js")).is_err());
        assert!(run(&blog, "post", Some("js")).is_ok());
    }
}
