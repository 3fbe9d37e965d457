//! Print a resolved post

use anyhow::Result;

use crate::Blog;

/// Resolve `slug` and print it as pretty JSON
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    let post = blog.content().post(slug)?;
    println!("{}", serde_json::to_string_pretty(&post)?);
    Ok(())
}
