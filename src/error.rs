//! Error types for content resolution

use std::path::PathBuf;

use crate::content::FrontMatterError;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ContentError>;

/// Everything that can go wrong while resolving site content
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("invalid tag `{tag}` in {path:?}: {reason}")]
    InvalidTagDictionary {
        path: PathBuf,
        tag: String,
        reason: String,
    },

    #[error("post `{slug}` has no `tags` field")]
    MissingTags { slug: String },

    #[error("post `{slug}` has invalid `tags`: {reason}")]
    InvalidTags { slug: String, reason: String },

    #[error("failed to load config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error comes from a missing file or directory
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
