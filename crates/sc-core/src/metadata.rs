//! Comment metadata mapping
//!
//! Comment source files carry a header of `Key: value` pairs. Keys are
//! case-insensitive and stored lower-cased; values are kept verbatim.

use crate::error::{Result, StaticCommentsError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mandatory: who wrote the comment
pub const AUTHOR: &str = "author";
/// Mandatory: when the comment was written
pub const DATE: &str = "date";
/// Slug of the comment this one replies to
pub const REPLY_TO: &str = "replyto";
/// Explicit avatar path or URL
pub const AVATAR: &str = "avatar";
/// Author e-mail, used as the identicon key
pub const EMAIL: &str = "email";
/// Explicit slug, overrides the one derived from the file name
pub const SLUG: &str = "slug";

/// Naive formats accepted for `date`, tried in order
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M",
];

/// Metadata of a single comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one for that key
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.as_ref().trim().to_lowercase(), value.into())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_lowercase()).map(|v| v.as_str())
    }

    /// Get a value that must be present
    pub fn require(&self, key: &str, path: &Path) -> Result<&str> {
        self.get(key).ok_or_else(|| StaticCommentsError::MissingMetadata {
            field: key.to_string(),
            path: path.to_path_buf(),
        })
    }

    /// Check if a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (k, v) in iter {
            metadata.insert(k, v);
        }
        metadata
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Keys go through `insert` so they are normalised like parsed headers
        let entries = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

/// Parse a metadata date value
///
/// Values without an offset are taken as UTC.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(StaticCommentsError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_keys_are_case_insensitive() {
        let metadata = Metadata::new().with("Author", "Ada").with(" ReplyTo ", "c1md");
        assert_eq!(metadata.get("author"), Some("Ada"));
        assert_eq!(metadata.get("AUTHOR"), Some("Ada"));
        assert_eq!(metadata.get(REPLY_TO), Some("c1md"));
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn test_require_missing_field() {
        let metadata = Metadata::new().with(AUTHOR, "Ada");
        let err = metadata.require(DATE, Path::new("c1.md")).unwrap_err();
        assert!(matches!(
            err,
            StaticCommentsError::MissingMetadata { ref field, .. } if field == "date"
        ));
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2020, 5, 17, 14, 30, 0).unwrap();
        assert_eq!(parse_date("2020-05-17 14:30").unwrap(), expected);
        assert_eq!(parse_date("2020-05-17 14:30:00").unwrap(), expected);
        assert_eq!(parse_date("2020-05-17T14:30").unwrap(), expected);
        assert_eq!(parse_date("2020-05-17T16:30:00+02:00").unwrap(), expected);
        assert_eq!(
            parse_date("2020-05-17").unwrap(),
            Utc.with_ymd_and_hms(2020, 5, 17, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(matches!(
            parse_date("yesterday"),
            Err(StaticCommentsError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_deserialized_keys_are_normalised() {
        let metadata: Metadata =
            serde_json::from_str(r#"{"Author": "Ada", " ReplyTo ": "c1md"}"#).unwrap();
        assert_eq!(metadata.get(AUTHOR), Some("Ada"));
        assert_eq!(metadata.get(REPLY_TO), Some("c1md"));
        assert_eq!(metadata, Metadata::new().with("author", "Ada").with("replyto", "c1md"));
    }

    #[test]
    fn test_from_iterator() {
        let metadata: Metadata = vec![("Email", "a@example.com")].into_iter().collect();
        assert_eq!(metadata.get(EMAIL), Some("a@example.com"));
    }
}
