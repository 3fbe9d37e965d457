//! Static routes, one per post

use anyhow::Result;

use crate::helpers::post_path;
use crate::Blog;

/// Routes for every post page, in directory-listing order
pub fn static_paths(blog: &Blog) -> Result<Vec<String>> {
    let route = &blog.config.post_route;
    Ok(blog
        .content()
        .post_slugs()?
        .iter()
        .map(|slug| post_path(route, slug))
        .collect())
}

pub fn run(blog: &Blog) -> Result<()> {
    for path in static_paths(blog)? {
        println!("{}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    #[test]
    fn test_static_paths() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("content/posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("solid.md"), "").unwrap();
        fs::write(posts.join("design-patterns.md"), "").unwrap();
        fs::write(posts.join("draft.txt"), "").unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let paths: HashSet<_> = static_paths(&blog).unwrap().into_iter().collect();
        let expected: HashSet<_> = ["/coisas/solid", "/coisas/design-patterns"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(paths, expected);
    }
}
