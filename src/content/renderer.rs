//! Single-post renderer
//!
//! Resolves one slug to its raw content, parses the shared front-matter
//! format, and renders the body to HTML. Runs once per post navigation.

use super::cancel::CancelToken;
use super::error::ContentError;
use super::frontmatter::FrontMatter;
use super::markdown::MarkdownRenderer;
use super::post::PostDocument;
use super::store::ContentStore;

/// Renders a single post from a content store
pub struct PostRenderer<'a, S> {
    store: &'a S,
    markdown: MarkdownRenderer,
}

impl<'a, S: ContentStore> PostRenderer<'a, S> {
    pub fn new(store: &'a S, markdown: MarkdownRenderer) -> Self {
        Self { store, markdown }
    }

    /// Load and render the post addressed by `slug`.
    ///
    /// A failed read is NotFound; a malformed front-matter block is a
    /// parse error. Both are recoverable at the caller, neither is retried.
    pub async fn render(
        &self,
        slug: &str,
        cancel: &CancelToken,
    ) -> Result<PostDocument, ContentError> {
        let raw = tokio::select! {
            _ = cancel.cancelled() => return Err(ContentError::Cancelled),
            read = self.store.read_entry(slug) => read.map_err(|e| {
                tracing::debug!("Read failed for '{}': {}", slug, e);
                ContentError::NotFound {
                    slug: slug.to_string(),
                }
            })?,
        };

        let (fm, body) = FrontMatter::parse(&raw, slug)?;
        let (title, date) = fm.title_and_date(slug)?;
        let html = self.markdown.render(body);

        Ok(PostDocument {
            slug: slug.to_string(),
            title,
            date,
            keywords: fm.keywords,
            raw: body.to_string(),
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::FsStore;
    use std::fs;

    fn renderer_over(dir: &std::path::Path) -> (FsStore, MarkdownRenderer) {
        (FsStore::new(dir), MarkdownRenderer::new())
    }

    #[tokio::test]
    async fn test_render_post() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("first.md"),
            "---\ntitle: \"First Post\"\ndate: \"2025-07-21\"\nkeywords: [\"intro\"]\n---\n\n# Heading\n\nSome *styled* text.\n",
        )
        .unwrap();

        let (store, markdown) = renderer_over(dir.path());
        let renderer = PostRenderer::new(&store, markdown);
        let post = renderer.render("first", &CancelToken::new()).await.unwrap();

        assert_eq!(post.slug, "first");
        assert_eq!(post.title, "First Post");
        assert_eq!(post.date.to_string(), "2025-07-21");
        assert_eq!(post.keywords, vec!["intro"]);
        assert!(post.raw.contains("# Heading"));
        assert!(post.html.contains("<h1>Heading</h1>"));
        assert!(post.html.contains(r#"<span style="font-style: italic;">styled</span>"#));
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let (store, markdown) = renderer_over(dir.path());
        let renderer = PostRenderer::new(&store, markdown);
        let err = renderer
            .render("missing", &CancelToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::NotFound { ref slug } if slug == "missing"));
    }

    #[tokio::test]
    async fn test_malformed_front_matter_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.md"), "just markdown, no header\n").unwrap();

        let (store, markdown) = renderer_over(dir.path());
        let renderer = PostRenderer::new(&store, markdown);
        let err = renderer
            .render("broken", &CancelToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::Frontmatter { .. }));
    }

    #[tokio::test]
    async fn test_missing_title_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("untitled.md"),
            "---\ndate: \"2025-07-21\"\n---\nBody.\n",
        )
        .unwrap();

        let (store, markdown) = renderer_over(dir.path());
        let renderer = PostRenderer::new(&store, markdown);
        let err = renderer
            .render("untitled", &CancelToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::MissingField { ref field, .. } if field == "title"));
    }
}
