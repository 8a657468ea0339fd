//! marklog: a markdown blog content pipeline
//!
//! This crate discovers markdown posts with front-matter metadata, builds a
//! chronologically sorted index of summaries, and renders individual posts
//! to HTML with syntax-highlighted code blocks and rewritten image paths.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts source directory
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Filesystem-backed content store for this site
    pub fn store(&self) -> content::FsStore {
        content::FsStore::new(&self.posts_dir)
    }

    /// Markdown renderer configured for this site
    pub fn markdown(&self) -> content::MarkdownRenderer {
        content::MarkdownRenderer::with_options(
            &self.config.highlight.theme,
            &self.config.images.post_prefix,
            &self.config.images.public_root,
        )
    }
}
