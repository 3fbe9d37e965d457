//! Export page data as JSON
//!
//! Each page of the blog receives a fixed set of resolved data: the home
//! page gets the site and the featured posts, the listing page gets every
//! post plus the tag dictionary, and each post page gets its own post.
//! This writes exactly that data, one JSON file per page, so any renderer
//! can consume it.
//!
//! Layout under the export directory:
//!
//! - `index.json`: home page
//! - `<route>/index.json`: listing page (`posts.json` when the route is `/`)
//! - `<route>/<slug>/index.json`: one per post

use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::content::{Post, SiteMeta, TagDictionary};
use crate::helpers::{route_dir, select_posts};
use crate::Blog;

#[derive(Serialize)]
struct HomeData<'a> {
    site: &'a SiteMeta,
    posts: Vec<&'a Post>,
}

#[derive(Serialize)]
struct ListingData<'a> {
    site: &'a SiteMeta,
    posts: &'a [Post],
    tags: &'a TagDictionary,
}

#[derive(Serialize)]
struct PostData<'a> {
    site: &'a SiteMeta,
    post: &'a Post,
}

/// Write page data into the export directory, returning the files written
pub fn export(blog: &Blog) -> Result<Vec<PathBuf>> {
    let start = std::time::Instant::now();
    let content = blog.content();

    let site = content.site()?;
    let tags = content.tags()?;
    let posts = content.posts()?;

    let featured = if blog.config.featured.is_empty() {
        posts.iter().collect()
    } else {
        for slug in &blog.config.featured {
            if !posts.iter().any(|p| p.slug() == slug.as_str()) {
                tracing::warn!("Featured post `{}` was not resolved", slug);
            }
        }
        select_posts(&posts, &blog.config.featured)
    };

    let out = &blog.export_dir;
    let route = route_dir(&blog.config.post_route);
    let listing_dir = out.join(route);
    let listing_file = if route.is_empty() {
        out.join("posts.json")
    } else {
        listing_dir.join("index.json")
    };

    let mut pages = PageSet::default();

    pages.write(
        out.join("index.json"),
        &HomeData {
            site: &site,
            posts: featured,
        },
    )?;

    pages.write(
        listing_file,
        &ListingData {
            site: &site,
            posts: &posts,
            tags: &tags,
        },
    )?;

    for post in &posts {
        if !is_single_segment(post.slug()) {
            bail!("Post slug `{}` cannot be used as a page path", post.slug());
        }
        pages.write(
            listing_dir.join(post.slug()).join("index.json"),
            &PostData { site: &site, post },
        )?;
    }

    let written = pages.written;
    tracing::info!(
        "Exported {} files in {:.2}s",
        written.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(written)
}

/// Files written during one export; a page path may only be written once
#[derive(Default)]
struct PageSet {
    seen: HashSet<PathBuf>,
    written: Vec<PathBuf>,
}

impl PageSet {
    fn write<T: Serialize>(&mut self, path: PathBuf, data: &T) -> Result<()> {
        if !self.seen.insert(path.clone()) {
            bail!("Two pages would be written to {:?}", path);
        }
        write_json(&path, data)?;
        self.written.push(path);
        Ok(())
    }
}

fn is_single_segment(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(data)?)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

pub fn run(blog: &Blog) -> Result<()> {
    let written = export(blog)?;
    println!("Exported {} pages to {:?}", written.len(), blog.export_dir);
    Ok(())
}
