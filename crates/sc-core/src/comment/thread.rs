//! Per-article comment threads
//!
//! Comments of an article arrive as a flat list; replies name their parent
//! through `reply_to`. Assembly turns the list into a forest of reply trees.

use super::model::CommentNode;
use crate::types::CommentSlug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// All comments attached to one article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentThread {
    /// Slug of the article the comments belong to
    pub article: String,
    /// Top-level comments
    pub roots: Vec<CommentNode>,
    /// Replies that could not be attached to any root
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orphans: Vec<CommentSlug>,
}

impl CommentThread {
    /// Create an empty thread
    pub fn new(article: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            roots: Vec::new(),
            orphans: Vec::new(),
        }
    }

    /// Build a thread from a flat list of comments
    ///
    /// Comments without `reply_to` become roots, in input order. Each reply is
    /// attached to the first node reached with its parent's slug, in input
    /// order. Replies that cannot be reached from a root (missing parent or a
    /// `reply_to` cycle) are left out and recorded in `orphans`.
    pub fn assemble(article: impl Into<String>, comments: Vec<CommentNode>) -> Self {
        let mut thread = Self::new(article);
        let mut pending: HashMap<CommentSlug, Vec<CommentNode>> = HashMap::new();
        let mut pending_order: Vec<CommentSlug> = Vec::new();

        for comment in comments {
            match comment.reply_to.clone() {
                Some(parent) => {
                    if !pending.contains_key(&parent) {
                        pending_order.push(parent.clone());
                    }
                    pending.entry(parent).or_default().push(comment);
                }
                None => thread.roots.push(comment),
            }
        }

        for root in &mut thread.roots {
            attach_pending(root, &mut pending);
        }

        for parent in pending_order {
            if let Some(replies) = pending.remove(&parent) {
                for reply in replies {
                    warn!(
                        "Comment {} in '{}' replies to {}, which is not in the thread",
                        reply.slug, thread.article, parent
                    );
                    collect_slugs(&reply, &mut thread.orphans);
                }
            }
        }

        debug!(
            "Assembled thread '{}': {} roots, {} comments, {} orphans",
            thread.article,
            thread.roots.len(),
            thread.count(),
            thread.orphans.len()
        );

        thread
    }

    /// Sort roots and every reply list by date, oldest first (stable)
    pub fn sort(&mut self) {
        for root in &mut self.roots {
            root.sort_replies();
        }
        self.roots.sort_by_key(|r| r.date);
    }

    /// Find any comment of the thread by slug
    pub fn find(&self, slug: &str) -> Option<&CommentNode> {
        for root in &self.roots {
            if root.slug == slug {
                return Some(root);
            }
            if let Some(found) = root.get_reply(slug) {
                return Some(found);
            }
        }
        None
    }

    /// Total number of comments, roots included
    pub fn count(&self) -> usize {
        self.roots.iter().map(|r| r.count_replies() + 1).sum()
    }

    /// Number of top-level comments
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Check if the thread has no comments
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Move the replies waiting for `node` (and, recursively, for its replies) under it
fn attach_pending(node: &mut CommentNode, pending: &mut HashMap<CommentSlug, Vec<CommentNode>>) {
    if let Some(replies) = pending.remove(&node.slug) {
        for mut reply in replies {
            attach_pending(&mut reply, pending);
            node.add_reply(reply);
        }
    }
    // Replies present before assembly may also be waited on
    for reply in &mut node.replies {
        if pending.contains_key(&reply.slug) {
            attach_pending(reply, pending);
        }
    }
}

fn collect_slugs(node: &CommentNode, out: &mut Vec<CommentSlug>) {
    out.push(node.slug.clone());
    for reply in &node.replies {
        collect_slugs(reply, out);
    }
}
