//! Content module - the post pipeline: front matter, index, rendering

mod cancel;
mod error;
mod frontmatter;
mod index;
mod markdown;
mod post;
mod renderer;
mod store;

pub use cancel::CancelToken;
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use index::IndexBuilder;
pub use markdown::MarkdownRenderer;
pub use post::{PostDocument, PostSummary};
pub use renderer::PostRenderer;
pub use store::{ContentStore, FsStore};

pub(crate) use markdown::escape_html;
