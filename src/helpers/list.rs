//! Post list helpers

use indexmap::IndexMap;

use crate::content::{Post, TagDictionary};

/// Posts carrying a resolved tag with the given display value
pub fn filter_by_tag<'a>(posts: &'a [Post], value: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.meta.has_tag(value)).collect()
}

/// Pick posts by slug, in the order given; unknown slugs are ignored
pub fn select_posts<'a>(posts: &'a [Post], slugs: &[String]) -> Vec<&'a Post> {
    slugs
        .iter()
        .filter_map(|slug| posts.iter().find(|post| post.slug() == slug.as_str()))
        .collect()
}

/// Number of posts using each dictionary tag, in dictionary order
pub fn tag_counts<'a>(tags: &'a TagDictionary, posts: &[Post]) -> IndexMap<&'a str, usize> {
    tags.values()
        .map(|tag| {
            let count = posts.iter().filter(|p| p.meta.has_tag(&tag.value)).count();
            (tag.value.as_str(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Metadata, PostMeta, TagDescriptor};

    fn post(slug: &str, tags: &[&str]) -> Post {
        Post {
            meta: PostMeta {
                slug: slug.to_string(),
                title: None,
                description: None,
                tags: tags
                    .iter()
                    .map(|t| Some(TagDescriptor::new(*t, None)))
                    .collect(),
                extra: Metadata::new(),
            },
            content: "body".to_string(),
        }
    }

    #[test]
    fn test_filter_by_tag() {
        let posts = vec![
            post("a", &["Rust"]),
            post("b", &["Go"]),
            post("c", &["Rust", "Go"]),
        ];
        let slugs: Vec<_> = filter_by_tag(&posts, "Rust")
            .into_iter()
            .map(|p| p.slug())
            .collect();
        assert_eq!(slugs, vec!["a", "c"]);
        assert!(filter_by_tag(&posts, "Zig").is_empty());
    }

    #[test]
    fn test_select_posts() {
        let posts = vec![post("a", &[]), post("b", &[]), post("c", &[])];
        let wanted = vec!["c".to_string(), "missing".to_string(), "a".to_string()];
        let slugs: Vec<_> = select_posts(&posts, &wanted)
            .into_iter()
            .map(|p| p.slug())
            .collect();
        assert_eq!(slugs, vec!["c", "a"]);
    }

    #[test]
    fn test_tag_counts() {
        let mut tags = TagDictionary::new();
        tags.insert("rust".to_string(), TagDescriptor::new("Rust", None));
        tags.insert("zig".to_string(), TagDescriptor::new("Zig", None));
        let posts = vec![post("a", &["Rust"]), post("b", &["Rust"])];

        let counts = tag_counts(&tags, &posts);
        assert_eq!(counts["Rust"], 2);
        assert_eq!(counts["Zig"], 0);
    }
}
