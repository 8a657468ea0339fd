//! Post index builder
//!
//! Discovers every markdown entry in a content store, parses each
//! front-matter block, and produces a date-descending list of summaries.
//! Runs once per listing view; nothing is cached between builds.

use futures_util::future;

use super::cancel::CancelToken;
use super::error::ContentError;
use super::frontmatter::FrontMatter;
use super::post::PostSummary;
use super::store::ContentStore;

/// Builds the chronological post index from a content store
pub struct IndexBuilder<'a, S> {
    store: &'a S,
}

impl<'a, S: ContentStore> IndexBuilder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Build the index: one summary per parseable entry, newest first.
    ///
    /// Entries are read concurrently; a malformed entry is skipped with a
    /// warning, and an enumeration failure yields an empty index plus a
    /// diagnostic. Only cancellation aborts the whole build.
    pub async fn build(&self, cancel: &CancelToken) -> Result<Vec<PostSummary>, ContentError> {
        let slugs = match self.store.list_entries().await {
            Ok(slugs) => slugs,
            Err(e) => {
                tracing::error!("Failed to enumerate posts: {}", e);
                return Ok(Vec::new());
            }
        };

        let reads = slugs.iter().map(|slug| self.load_summary(slug, cancel));
        let results = future::join_all(reads).await;

        let mut summaries = Vec::with_capacity(slugs.len());
        for (slug, result) in slugs.iter().zip(results) {
            match result {
                Ok(summary) => summaries.push(summary),
                Err(ContentError::Cancelled) => return Err(ContentError::Cancelled),
                Err(e) => {
                    tracing::warn!("Skipping post '{}': {}", slug, e);
                }
            }
        }

        // Stable sort: entries with equal dates keep enumeration order
        summaries.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(summaries)
    }

    async fn load_summary(
        &self,
        slug: &str,
        cancel: &CancelToken,
    ) -> Result<PostSummary, ContentError> {
        let raw = tokio::select! {
            _ = cancel.cancelled() => return Err(ContentError::Cancelled),
            read = self.store.read_entry(slug) => read?,
        };

        let (fm, _body) = FrontMatter::parse(&raw, slug)?;
        let (title, date) = fm.title_and_date(slug)?;

        Ok(PostSummary {
            slug: slug.to_string(),
            title,
            date,
            keywords: fm.keywords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::FsStore;
    use std::fs;
    use std::path::Path;

    fn write_post(dir: &Path, slug: &str, title: &str, date: &str) {
        let content = format!(
            "---\ntitle: \"{}\"\ndate: \"{}\"\nkeywords: [\"a\", \"b\"]\n---\n\nBody of {}.\n",
            title, date, slug
        );
        fs::write(dir.join(format!("{}.md", slug)), content).unwrap();
    }

    #[tokio::test]
    async fn test_index_is_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "older", "Older Post", "2025-07-20");
        write_post(dir.path(), "newer", "Newer Post", "2025-07-21");
        write_post(dir.path(), "oldest", "Oldest Post", "2024-12-31");

        let store = FsStore::new(dir.path());
        let index = IndexBuilder::new(&store)
            .build(&CancelToken::new())
            .await
            .unwrap();

        let slugs: Vec<_> = index.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older", "oldest"]);
        assert_eq!(index[0].title, "Newer Post");
        assert_eq!(index[0].keywords, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_equal_dates_keep_enumeration_order() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "bravo", "Bravo", "2025-07-21");
        write_post(dir.path(), "alpha", "Alpha", "2025-07-21");

        let store = FsStore::new(dir.path());
        let index = IndexBuilder::new(&store)
            .build(&CancelToken::new())
            .await
            .unwrap();

        let slugs: Vec<_> = index.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "bravo"]);
    }

    #[tokio::test]
    async fn test_malformed_post_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "good", "Good Post", "2025-07-21");
        fs::write(dir.path().join("bad.md"), "no front matter here\n").unwrap();
        fs::write(
            dir.path().join("undated.md"),
            "---\ntitle: \"Undated\"\n---\nBody.\n",
        )
        .unwrap();

        let store = FsStore::new(dir.path());
        let index = IndexBuilder::new(&store)
            .build(&CancelToken::new())
            .await
            .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index[0].slug, "good");
    }

    #[tokio::test]
    async fn test_unreadable_directory_yields_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let store = FsStore::new(&missing);
        let index = IndexBuilder::new(&store)
            .build(&CancelToken::new())
            .await
            .unwrap();

        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_build_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "post", "Post", "2025-07-21");

        let store = FsStore::new(dir.path());
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = IndexBuilder::new(&store).build(&cancel).await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
