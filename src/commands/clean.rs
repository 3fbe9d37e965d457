//! Clean the export directory

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Remove exported page data
pub fn run(blog: &Blog) -> Result<()> {
    if blog.export_dir.exists() {
        fs::remove_dir_all(&blog.export_dir)?;
        tracing::info!("Deleted: {:?}", blog.export_dir);
    }

    Ok(())
}
