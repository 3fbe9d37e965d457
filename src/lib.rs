//! coisas: content resolver for a Markdown blog
//!
//! Reads a site document, a tag dictionary and a directory of posts, all
//! Markdown with front-matter, and hands back plain data for page rendering.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

pub use error::{ContentError, Result};

use std::path::{Path, PathBuf};

use content::ContentResolver;

/// A blog project rooted at a directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Content configuration
    pub config: config::ContentConfig,
    /// Project root
    pub base_dir: PathBuf,
    /// Where page data is exported
    pub export_dir: PathBuf,
    resolver: ContentResolver,
}

impl Blog {
    /// Open a project, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::ContentConfig::load_from_root(&base_dir)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Open a project with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::ContentConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let export_dir = base_dir.join(&config.export_dir);
        let resolver = ContentResolver::new(&base_dir, config.clone());

        Self {
            config,
            base_dir,
            export_dir,
            resolver,
        }
    }

    /// Content resolver for this project
    pub fn content(&self) -> &ContentResolver {
        &self.resolver
    }

    /// Export page data as JSON
    pub fn export(&self) -> anyhow::Result<()> {
        commands::export::run(self)
    }

    /// Remove exported page data
    pub fn clean(&self) -> anyhow::Result<()> {
        commands::clean::run(self)
    }

    /// Validate content and report problems
    pub fn check(&self) -> anyhow::Result<()> {
        commands::check::run(self)
    }
}
