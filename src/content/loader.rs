//! Content resolver - loads site metadata, tags and posts from the content tree

use indexmap::IndexMap;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::scalar_to_string;
use super::{Document, Metadata, Post, PostMeta, SiteMeta, TagDescriptor, TagDictionary};
use crate::config::{ContentConfig, InvalidPostPolicy};
use crate::error::{ContentError, Result};

/// Resolves content documents under a project root
///
/// Nothing is cached: every call goes back to disk.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    root: PathBuf,
    config: ContentConfig,
}

/// Why a post was left out of an aggregate result
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("post body is empty")]
    EmptyContent,

    #[error(transparent)]
    Invalid(ContentError),
}

/// A post that aggregate resolution did not return
#[derive(Debug)]
pub struct SkippedPost {
    pub slug: String,
    pub reason: SkipReason,
}

/// Outcome of resolving every post, with nothing swallowed
#[derive(Debug, Default)]
pub struct PostsReport {
    pub posts: Vec<Post>,
    pub skipped: Vec<SkippedPost>,
    /// Tag identifiers with no dictionary entry, by post slug
    pub dangling: IndexMap<String, Vec<String>>,
}

impl PostsReport {
    /// True when every post resolved and every tag reference is known
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.dangling.is_empty()
    }
}

/// A post plus the identifiers that failed to resolve
struct ResolvedPost {
    post: Post,
    dangling: Vec<String>,
}

impl ContentResolver {
    /// Create a resolver rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P, config: ContentConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Create a resolver with the default layout
    pub fn with_defaults<P: AsRef<Path>>(root: P) -> Self {
        Self::new(root, ContentConfig::default())
    }

    pub fn site_path(&self) -> PathBuf {
        self.root.join(&self.config.site_path)
    }

    pub fn tags_path(&self) -> PathBuf {
        self.root.join(&self.config.tags_path)
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(&self.config.posts_dir)
    }

    /// File path a slug resolves to
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.posts_dir().join(format!("{}.{}", slug, self.config.extension()))
    }

    /// Site metadata from the site document
    pub fn site(&self) -> Result<SiteMeta> {
        let doc = Document::read(self.site_path())?;
        Ok(SiteMeta(doc.data))
    }

    /// Tag dictionary from the tags document
    pub fn tags(&self) -> Result<TagDictionary> {
        let path = self.tags_path();
        let doc = Document::read(&path)?;

        let tags = doc
            .data
            .into_iter()
            .map(|(tag, value)| match serde_yaml::from_value::<TagDescriptor>(value) {
                Ok(descriptor) => Ok((tag, descriptor)),
                Err(e) => Err(ContentError::InvalidTagDictionary {
                    path: path.clone(),
                    tag,
                    reason: e.to_string(),
                }),
            })
            .collect::<Result<TagDictionary>>()?;

        tracing::debug!("Loaded {} tags from {:?}", tags.len(), path);
        Ok(tags)
    }

    /// Resolve one post by slug
    pub fn post(&self, slug: &str) -> Result<Post> {
        let doc = self.read_post(slug)?;
        let tags = self.tags()?;
        Ok(build_post(slug, doc, &tags)?.post)
    }

    /// Slugs of every post file, in directory-listing order
    pub fn post_slugs(&self) -> Result<Vec<String>> {
        let dir = self.posts_dir();
        let extension = self.config.extension();
        let mut slugs = Vec::new();

        // Only entries named like posts get their link target inspected
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                ContentError::io(path, e.into())
            })?;

            let Some(name) = entry.file_name().to_str() else {
                tracing::debug!("Skipping non UTF-8 file name {:?}", entry.path());
                continue;
            };

            let Some(slug) = slug_from_file_name(name, extension) else {
                continue;
            };

            let is_file = if entry.path_is_symlink() {
                match fs::metadata(entry.path()) {
                    Ok(target) => target.is_file(),
                    Err(e) => {
                        tracing::warn!("Skipping broken link {:?}: {}", entry.path(), e);
                        false
                    }
                }
            } else {
                entry.file_type().is_file()
            };

            if is_file {
                slugs.push(slug.to_string());
            }
        }

        tracing::debug!("Found {} posts in {:?}", slugs.len(), dir);
        Ok(slugs)
    }

    /// Resolve every post, honouring the configured invalid-post policy
    ///
    /// Posts with an empty body are always left out.
    pub fn posts(&self) -> Result<Vec<Post>> {
        match self.config.on_invalid_post {
            InvalidPostPolicy::Fail => self.posts_fail_fast(),
            InvalidPostPolicy::Skip => Ok(self.posts_report()?.posts),
        }
    }

    /// Resolve every post, recording each failure instead of aborting
    ///
    /// Only a failure to list the posts directory or to load the tag
    /// dictionary makes this return an error.
    pub fn posts_report(&self) -> Result<PostsReport> {
        let slugs = self.post_slugs()?;
        let mut report = PostsReport::default();
        if slugs.is_empty() {
            return Ok(report);
        }

        let tags = self.tags()?;

        for slug in slugs {
            let resolved = self
                .read_post(&slug)
                .and_then(|doc| build_post(&slug, doc, &tags));

            match resolved {
                Ok(resolved) => {
                    if !resolved.dangling.is_empty() {
                        report.dangling.insert(slug.clone(), resolved.dangling);
                    }
                    if resolved.post.content.is_empty() {
                        tracing::warn!("Skipping post `{}`: empty body", slug);
                        report.skipped.push(SkippedPost {
                            slug,
                            reason: SkipReason::EmptyContent,
                        });
                    } else {
                        report.posts.push(resolved.post);
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping post `{}`: {}", slug, e);
                    report.skipped.push(SkippedPost {
                        slug,
                        reason: SkipReason::Invalid(e),
                    });
                }
            }
        }

        Ok(report)
    }

    fn posts_fail_fast(&self) -> Result<Vec<Post>> {
        let slugs = self.post_slugs()?;
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        // Content is static for the duration of one call
        let tags = self.tags()?;
        let mut posts = Vec::with_capacity(slugs.len());

        for slug in slugs {
            let doc = self.read_post(&slug)?;
            let resolved = build_post(&slug, doc, &tags)?;

            if resolved.post.content.is_empty() {
                tracing::warn!("Dropping post `{}`: empty body", slug);
                continue;
            }
            posts.push(resolved.post);
        }

        Ok(posts)
    }

    fn read_post(&self, slug: &str) -> Result<Document> {
        Document::read(self.post_path(slug))
    }
}

/// Join a post document against the tag dictionary
fn build_post(slug: &str, doc: Document, dictionary: &TagDictionary) -> Result<ResolvedPost> {
    let Document { mut data, content } = doc;

    let identifiers = take_tag_identifiers(slug, &mut data)?;

    if data.shift_remove("slug").is_some() {
        tracing::debug!("Post `{}`: front-matter slug ignored, file name wins", slug);
    }

    let mut dangling = Vec::new();
    let tags = identifiers
        .into_iter()
        .map(|id| {
            let descriptor = dictionary.get(&id).cloned();
            if descriptor.is_none() {
                tracing::warn!("Post `{}` references unknown tag `{}`", slug, id);
                dangling.push(id);
            }
            descriptor
        })
        .collect();

    let meta = PostMeta {
        slug: slug.to_string(),
        title: take_string(&mut data, "title"),
        description: take_string(&mut data, "description"),
        tags,
        extra: data,
    };

    Ok(ResolvedPost {
        post: Post { meta, content },
        dangling,
    })
}

fn take_tag_identifiers(slug: &str, data: &mut Metadata) -> Result<Vec<String>> {
    let invalid = |reason: String| ContentError::InvalidTags {
        slug: slug.to_string(),
        reason,
    };

    let sequence = match data.shift_remove("tags") {
        None => {
            return Err(ContentError::MissingTags {
                slug: slug.to_string(),
            })
        }
        Some(Value::Sequence(sequence)) => sequence,
        Some(other) => {
            return Err(invalid(format!(
                "expected a sequence, found {}",
                value_kind(&other)
            )))
        }
    };

    sequence
        .iter()
        .enumerate()
        .map(|(i, value)| {
            scalar_to_string(value).ok_or_else(|| {
                invalid(format!(
                    "entry {} is {}, expected an identifier",
                    i,
                    value_kind(value)
                ))
            })
        })
        .collect()
}

/// Remove `key` only when it holds a string
fn take_string(data: &mut Metadata, key: &str) -> Option<String> {
    if !matches!(data.get(key), Some(Value::String(_))) {
        return None;
    }
    match data.shift_remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Derive a slug from a file name, if it carries the post extension
///
/// Only the final `.<extension>` suffix is stripped, so `my.post.md`
/// yields `my.post`.
pub fn slug_from_file_name<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}
