//! Post, tag and site models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Ordered key/value metadata taken from a front-matter header
pub type Metadata = IndexMap<String, Value>;

/// Site-wide metadata from the site document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteMeta(pub Metadata);

impl SiteMeta {
    /// Site title, when the document defines one
    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

/// Display descriptor for a tag identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagDescriptor {
    /// Label shown on badges
    pub value: String,

    /// Badge color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Additional descriptor fields
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TagDescriptor {
    pub fn new(value: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            value: value.into(),
            color: color.map(str::to_string),
            extra: IndexMap::new(),
        }
    }
}

/// Lookup table from tag identifier to descriptor
pub type TagDictionary = IndexMap<String, TagDescriptor>;

/// An in-page anchor listed next to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLink {
    pub name: String,
    pub link: String,
}

/// Post metadata: slug, front-matter fields and resolved tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Slug derived from the file name
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resolved tags, positionally aligned with the raw identifiers.
    /// `None` marks an identifier missing from the dictionary.
    pub tags: Vec<Option<TagDescriptor>>,

    /// Remaining front-matter fields
    #[serde(flatten)]
    pub extra: Metadata,
}

impl PostMeta {
    /// Code languages offered by the post, from the `langs` field
    pub fn langs(&self) -> Option<Vec<&str>> {
        let langs = self.extra.get("langs")?.as_sequence()?;
        Some(langs.iter().filter_map(Value::as_str).collect())
    }

    /// Section anchors, from the `sections` field
    pub fn sections(&self) -> Option<Vec<SectionLink>> {
        let sections = self.extra.get("sections")?;
        serde_yaml::from_value(sections.clone()).ok()
    }

    /// True when a resolved tag carries the given display value
    pub fn has_tag(&self, value: &str) -> bool {
        self.tags.iter().flatten().any(|tag| tag.value == value)
    }

    /// Resolved tags that exist in the dictionary
    pub fn known_tags(&self) -> impl Iterator<Item = &TagDescriptor> {
        self.tags.iter().flatten()
    }
}

/// A resolved blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,

    /// Raw Markdown/MDX body after the front-matter block
    pub content: String,
}

impl Post {
    pub fn slug(&self) -> &str {
        &self.meta.slug
    }

    /// Display title, falling back to the slug
    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(&self.meta.slug)
    }
}
