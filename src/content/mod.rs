//! Content module - front-matter documents, posts and tags

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::{Document, FrontMatterError};
pub use loader::{ContentResolver, PostsReport, SkipReason, SkippedPost};
pub use post::{Metadata, Post, PostMeta, SectionLink, SiteMeta, TagDescriptor, TagDictionary};
