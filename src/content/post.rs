//! Post summary and document models

use chrono::NaiveDate;
use serde::Serialize;

/// One entry in the post index listing.
///
/// Immutable once built; the index orders these by date descending.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    /// Identifier derived from the source filename (extension stripped)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    /// Keywords, in front-matter order
    pub keywords: Vec<String>,
}

/// A fully loaded post: metadata plus the raw and rendered body.
///
/// Produced for exactly one slug per render call and discarded afterwards;
/// nothing is cached across calls.
#[derive(Debug, Clone, Serialize)]
pub struct PostDocument {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub keywords: Vec<String>,

    /// Raw markdown body (front matter stripped)
    pub raw: String,

    /// Rendered HTML body
    pub html: String,
}
