//! Render a single post to a standalone HTML page

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::{escape_html, CancelToken, PostDocument, PostRenderer};
use crate::Blog;

/// Render the post addressed by `slug` to stdout or a file
pub async fn run(blog: &Blog, slug: &str, output: Option<&Path>) -> Result<()> {
    let store = blog.store();
    let renderer = PostRenderer::new(&store, blog.markdown());
    let post = renderer
        .render(slug, &CancelToken::new())
        .await
        .with_context(|| format!("failed to render '{}'", slug))?;

    let page = render_page(blog, &post);

    match output {
        Some(path) => {
            fs::write(path, page)?;
            println!("Rendered: {:?}", path);
        }
        None => println!("{}", page),
    }

    Ok(())
}

/// Assemble the post page: title heading, date line, keyword tags, body
fn render_page(blog: &Blog, post: &PostDocument) -> String {
    let keywords = post
        .keywords
        .iter()
        .map(|k| format!(r#"<span class="keyword">{}</span>"#, escape_html(k)))
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="utf-8">
  <title>{title} - {site}</title>
</head>
<body>
  <article class="post">
    <h1 class="post-title">{title}</h1>
    <p class="post-date"><span>Upload:</span> {date}</p>
    <div class="post-keywords">
      {keywords}
    </div>
    <div class="post-body">
{body}
    </div>
  </article>
</body>
</html>
"#,
        lang = blog.config.language,
        title = escape_html(&post.title),
        site = escape_html(&blog.config.title),
        date = post.date.format(&blog.config.date_format),
        keywords = keywords,
        body = post.html,
    )
}
