//! Content configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ContentError, Result};

/// Name of the optional configuration file at the project root
pub const CONFIG_FILE: &str = "_config.yml";

/// What aggregate resolution does with a post that fails to resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPostPolicy {
    /// Abort the whole call on the first failing post
    #[default]
    Fail,
    /// Leave the post out and keep going
    Skip,
}

/// Where content lives and how it is resolved
///
/// All paths are relative to the project root handed to the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    // Documents
    pub site_path: String,
    pub tags_path: String,
    pub posts_dir: String,
    pub extension: String,

    // Resolution
    pub on_invalid_post: InvalidPostPolicy,

    // Pages
    pub post_route: String,
    pub featured: Vec<String>,
    pub export_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            site_path: "content/site.md".to_string(),
            tags_path: "content/tags.md".to_string(),
            posts_dir: "content/posts".to_string(),
            extension: "md".to_string(),

            on_invalid_post: InvalidPostPolicy::Fail,

            post_route: "/coisas".to_string(),
            featured: Vec::new(),
            export_dir: "public".to_string(),
        }
    }
}

impl ContentConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;

        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ContentError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `_config.yml` from the project root, or fall back to defaults
    pub fn load_from_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILE);

        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Post file extension without a leading dot
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContentConfig::default();
        assert_eq!(config.site_path, "content/site.md");
        assert_eq!(config.tags_path, "content/tags.md");
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.extension(), "md");
        assert_eq!(config.on_invalid_post, InvalidPostPolicy::Fail);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
posts_dir: posts
extension: .mdx
on_invalid_post: skip
featured:
  - design-patterns
  - solid
"#;
        let config: ContentConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.extension(), "mdx");
        assert_eq!(config.on_invalid_post, InvalidPostPolicy::Skip);
        assert_eq!(config.featured, vec!["design-patterns", "solid"]);
        // Untouched keys keep their defaults
        assert_eq!(config.site_path, "content/site.md");
    }

    #[test]
    fn test_load_from_root() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            ContentConfig::load_from_root(dir.path()).unwrap(),
            ContentConfig::default()
        );

        fs::write(dir.path().join(CONFIG_FILE), "post_route: /posts\n").unwrap();
        let config = ContentConfig::load_from_root(dir.path()).unwrap();
        assert_eq!(config.post_route, "/posts");

        fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        assert_eq!(
            ContentConfig::load_from_root(dir.path()).unwrap(),
            ContentConfig::default()
        );
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "on_invalid_post: maybe\n").unwrap();
        let err = ContentConfig::load_from_root(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Config { .. }));
    }
}
