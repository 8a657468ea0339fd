//! Content repository abstraction and its filesystem-backed variant

use std::io;
use std::path::{Path, PathBuf};

/// Abstract repository of markdown entries, addressed by slug.
///
/// Decouples the pipeline from any particular discovery mechanism; the
/// index builder and post renderer only ever see slugs and raw text.
#[allow(async_fn_in_trait)]
pub trait ContentStore {
    /// Enumerate the slugs of every entry, in a stable order
    async fn list_entries(&self) -> io::Result<Vec<String>>;

    /// Read one entry's raw text
    async fn read_entry(&self, slug: &str) -> io::Result<String>;
}

/// Filesystem-backed store: a flat directory of `.md` files.
///
/// The slug is the file stem, and a slug resolves back to a path by direct
/// construction; no fuzzy matching. Two files that map to the same slug are
/// not detected, which entry wins is unspecified.
#[derive(Debug, Clone)]
pub struct FsStore {
    posts_dir: PathBuf,
}

impl FsStore {
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, slug: &str) -> PathBuf {
        self.posts_dir.join(format!("{}.md", slug))
    }
}

impl ContentStore for FsStore {
    async fn list_entries(&self) -> io::Result<Vec<String>> {
        let mut entries = Vec::new();
        let mut dir = tokio::fs::read_dir(&self.posts_dir).await?;

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if !entry.file_type().await?.is_file() || !is_markdown_file(&path) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                entries.push(stem.to_string());
            }
        }

        // Directory read order is platform-dependent; sort so enumeration
        // order (and therefore sort-tie order) is deterministic.
        entries.sort();
        Ok(entries)
    }

    async fn read_entry(&self, slug: &str) -> io::Result<String> {
        tokio::fs::read_to_string(self.entry_path(slug)).await
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
