//! Comment data model

use crate::content::Content;
use crate::metadata::Metadata;
use crate::types::CommentSlug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A comment and the replies nested under it
///
/// Nodes own their replies; there is no link back to the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentNode {
    /// Identifier of the comment within its thread
    pub slug: CommentSlug,
    /// Comment author
    pub author: String,
    /// When the comment was posted
    pub date: DateTime<Utc>,
    /// Resolved avatar path or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Rendered body
    pub content: String,
    /// Display title
    pub title: String,
    /// Slug of the comment this one answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<CommentSlug>,
    /// File the comment was read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
    /// Full metadata header
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    /// Direct replies, in insertion order until sorted
    #[serde(default)]
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Create a comment without replies
    pub fn new(
        slug: impl Into<CommentSlug>,
        author: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        let author = author.into();
        Self {
            slug: slug.into(),
            title: format!("Posted by:  {}", author),
            author,
            date,
            avatar: None,
            content: String::new(),
            reply_to: None,
            source_path: None,
            metadata: Metadata::new(),
            replies: Vec::new(),
        }
    }

    /// Append a reply. Duplicate slugs are not rejected.
    pub fn add_reply(&mut self, comment: CommentNode) {
        self.replies.push(comment);
    }

    /// Find a descendant by slug
    ///
    /// Depth-first, pre-order, left to right; the first match wins. The node
    /// itself is never compared.
    pub fn get_reply(&self, slug: &str) -> Option<&CommentNode> {
        for reply in &self.replies {
            if reply.slug == slug {
                return Some(reply);
            }
            if let Some(found) = reply.get_reply(slug) {
                return Some(found);
            }
        }
        None
    }

    /// Mutable variant of [`get_reply`](Self::get_reply), same traversal order
    pub fn get_reply_mut(&mut self, slug: &str) -> Option<&mut CommentNode> {
        for reply in &mut self.replies {
            if reply.slug == slug {
                return Some(reply);
            }
            if let Some(found) = reply.get_reply_mut(slug) {
                return Some(found);
            }
        }
        None
    }

    /// Sort the whole subtree by date, oldest first
    ///
    /// Children are sorted before their parent's list. The sort is stable, so
    /// replies with equal dates keep their insertion order.
    pub fn sort_replies(&mut self) {
        for reply in &mut self.replies {
            reply.sort_replies();
        }
        self.replies.sort_by_key(|r| r.date);
    }

    /// Number of descendants, not counting this node
    pub fn count_replies(&self) -> usize {
        self.replies
            .iter()
            .map(CommentNode::count_replies)
            .sum::<usize>()
            + self.replies.len()
    }

    /// Check if the comment has no replies
    pub fn is_leaf(&self) -> bool {
        self.replies.is_empty()
    }

    /// Length of the longest reply chain below this node
    pub fn depth(&self) -> usize {
        self.replies
            .iter()
            .map(|r| r.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Content for CommentNode {
    fn identifier(&self) -> &str {
        self.slug.as_str()
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}
