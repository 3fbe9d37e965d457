//! Create a new post

use anyhow::Result;
use serde_yaml::Value;
use std::fs;
use std::path::PathBuf;

use crate::content::{Document, Metadata};
use crate::Blog;

/// Create a new post file and return its path
pub fn create_post(
    blog: &Blog,
    title: &str,
    tags: &[String],
    description: Option<&str>,
    path: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match path {
        Some(p) => p.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }
    if !is_file_slug(&slug) {
        anyhow::bail!("Invalid post slug {:?}: must be a plain file name", slug);
    }

    let posts_dir = blog.content().posts_dir();
    fs::create_dir_all(&posts_dir)?;

    let file_path = blog.content().post_path(&slug);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Unknown tags are allowed but worth a heads-up
    match blog.content().tags() {
        Ok(dictionary) => {
            for tag in tags.iter().filter(|t| !dictionary.contains_key(t.as_str())) {
                tracing::warn!("Tag `{}` is not in the tag dictionary", tag);
            }
        }
        Err(e) => tracing::warn!("Could not load tag dictionary: {}", e),
    }

    let mut data = Metadata::new();
    data.insert("title".to_string(), Value::from(title));
    if let Some(description) = description {
        data.insert("description".to_string(), Value::from(description));
    }
    data.insert(
        "date".to_string(),
        Value::from(now.format("%Y-%m-%d %H:%M:%S").to_string()),
    );
    data.insert(
        "tags".to_string(),
        Value::Sequence(tags.iter().map(|t| Value::from(t.as_str())).collect()),
    );

    let content = Document::new(data, format!("\n# {}\n", title)).to_markdown()?;
    fs::write(&file_path, content)?;

    tracing::info!("Created post `{}`", slug);
    Ok(file_path)
}

/// A slug names one file directly inside the posts directory
fn is_file_slug(slug: &str) -> bool {
    !slug.contains(['/', '\\']) && slug != "." && slug != ".."
}
