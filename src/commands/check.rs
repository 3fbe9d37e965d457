//! Validate content without aborting on the first bad post

use anyhow::Result;

use crate::content::PostsReport;
use crate::Blog;

/// One line per problem found in the report
pub fn problems(report: &PostsReport) -> Vec<String> {
    let skipped = report
        .skipped
        .iter()
        .map(|s| format!("{}: {}", s.slug, s.reason));

    let dangling = report
        .dangling
        .iter()
        .map(|(slug, tags)| format!("{}: unknown tags {}", slug, tags.join(", ")));

    skipped.chain(dangling).collect()
}

pub fn run(blog: &Blog) -> Result<()> {
    let report = blog.content().posts_report()?;
    let problems = problems(&report);

    println!("Resolved {} posts", report.posts.len());
    if problems.is_empty() {
        println!("No problems found");
        return Ok(());
    }

    for problem in &problems {
        println!("  {}", problem);
    }
    anyhow::bail!("Found {} problem(s) in content", problems.len());
}
