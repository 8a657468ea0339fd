//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::content::{CancelToken, IndexBuilder};
use crate::Blog;

/// List site content by type
pub async fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let store = blog.store();
    let posts = IndexBuilder::new(&store).build(&CancelToken::new()).await?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", posts.len());
            for post in &posts {
                let keywords = post
                    .keywords
                    .iter()
                    .map(|k| k.to_uppercase())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "  {} - {} [{}] {}",
                    post.date.format(&blog.config.date_format),
                    post.title,
                    post.slug,
                    keywords
                );
            }
        }
        "keyword" | "keywords" => {
            let mut counts: IndexMap<String, usize> = IndexMap::new();
            for post in &posts {
                for keyword in &post.keywords {
                    *counts.entry(keyword.clone()).or_insert(0) += 1;
                }
            }
            println!("Keywords ({}):", counts.len());
            let mut counts: Vec<_> = counts.into_iter().collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            for (keyword, count) in counts {
                println!("  {} ({})", keyword, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, keyword",
                content_type
            );
        }
    }

    Ok(())
}
