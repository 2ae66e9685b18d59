//! Core type definitions for static-comments

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a comment within its thread, derived from the source file name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentSlug(pub String);

impl CommentSlug {
    /// Create a slug from an already normalized string
    pub fn new(s: impl Into<String>) -> Self {
        CommentSlug(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for CommentSlug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CommentSlug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CommentSlug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for CommentSlug {
    fn from(s: &str) -> Self {
        CommentSlug(s.to_string())
    }
}

impl From<String> for CommentSlug {
    fn from(s: String) -> Self {
        CommentSlug(s)
    }
}
