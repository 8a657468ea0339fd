//! Front-matter parsing
//!
//! Every post begins with a `---`-delimited YAML block carrying at least
//! `title` and `date`. The same parse routine feeds both the index builder
//! and the single-post renderer.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::error::ContentError;

/// Accept `keywords: foo` as shorthand for `keywords: [foo]`
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}

/// Metadata block at the head of a post file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub keywords: Vec<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse the leading front-matter block from `content`.
    ///
    /// Returns the parsed block and the remaining body text. `origin` names
    /// the source (slug or path) in error messages. A file that does not
    /// open with the delimiter, never closes it, or carries malformed YAML
    /// is an error, never a silent default.
    pub fn parse<'a>(content: &'a str, origin: &str) -> Result<(Self, &'a str), ContentError> {
        let trimmed = content.trim_start();
        let rest = trimmed
            .strip_prefix("---")
            .ok_or_else(|| ContentError::Frontmatter {
                path: origin.to_string(),
                message: "missing opening '---' delimiter".to_string(),
            })?;
        let rest = rest.trim_start_matches(['\n', '\r']);

        let end = rest.find("\n---").ok_or_else(|| ContentError::Frontmatter {
            path: origin.to_string(),
            message: "front-matter block is never closed".to_string(),
        })?;

        let yaml = &rest[..end];
        let body = rest[end + 4..].trim_start_matches(['\n', '\r']);

        let fm: FrontMatter =
            serde_yaml::from_str(yaml).map_err(|e| ContentError::Frontmatter {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok((fm, body))
    }

    /// Extract the required `title` and `date` fields, erroring on absence
    /// or an unparseable date string.
    pub fn title_and_date(&self, origin: &str) -> Result<(String, NaiveDate), ContentError> {
        let title = self
            .title
            .clone()
            .ok_or_else(|| ContentError::MissingField {
                field: "title".to_string(),
                path: origin.to_string(),
            })?;
        let raw = self
            .date
            .as_deref()
            .ok_or_else(|| ContentError::MissingField {
                field: "date".to_string(),
                path: origin.to_string(),
            })?;
        let date = parse_date_string(raw).ok_or_else(|| ContentError::InvalidDate {
            value: raw.to_string(),
            path: origin.to_string(),
        })?;
        Ok((title, date))
    }
}

/// Parse a date string in the formats posts actually use
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}
