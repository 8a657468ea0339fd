//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Create a new post file with a front-matter scaffold
pub fn run(blog: &Blog, title: &str) -> Result<()> {
    fs::create_dir_all(&blog.posts_dir)?;

    let slug = slug::slugify(title);
    let file_path = blog.posts_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    let content = format!(
        "---\ntitle: \"{}\"\ndate: \"{}\"\nkeywords: []\n---\n\n",
        title,
        now.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}
