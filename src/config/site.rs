//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub posts_dir: String,

    // Rendering
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Date format
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Image path rewriting for post bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Prefix post bodies use to reference bundled images
    pub post_prefix: String,
    /// Public root those references rewrite to
    pub public_root: String,
}

/// Code highlighting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            posts_dir: "public/post".to_string(),

            images: ImageConfig::default(),
            highlight: HighlightConfig::default(),

            date_format: "%Y-%m-%d".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            post_prefix: "/public/post/imgs/".to_string(),
            public_root: "/".to_string(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "public/post");
        assert_eq!(config.images.post_prefix, "/public/post/imgs/");
        assert_eq!(config.images.public_root, "/");
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        std::fs::write(
            &path,
            "title: Field Notes\nposts_dir: content/posts\nhighlight:\n  theme: InspiredGitHub\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "Field Notes");
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.highlight.theme, "InspiredGitHub");
        // Unspecified sections keep their defaults
        assert_eq!(config.images.post_prefix, "/public/post/imgs/");
    }
}
