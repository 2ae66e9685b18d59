//! JSON exporter for threads

use super::exporter::Exporter;
use crate::comment::{CommentNode, CommentThread};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON exporter with pretty and compact modes
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            name: if pretty {
                "json".to_string()
            } else {
                "json-compact".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(false)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(true)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, thread: &CommentThread) -> Result<String> {
        let data = ExportThread::from_thread(thread);

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Exported thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportThread {
    /// Article slug
    pub article: String,
    /// Number of comments, roots included
    pub total: usize,
    /// Top-level comments
    pub comments: Vec<ExportComment>,
}

impl ExportThread {
    /// Create from a thread
    pub fn from_thread(thread: &CommentThread) -> Self {
        Self {
            article: thread.article.clone(),
            total: thread.count(),
            comments: thread.roots.iter().map(ExportComment::from_node).collect(),
        }
    }
}

/// Exported comment with its replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportComment {
    pub slug: String,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub title: String,
    pub content: String,
    /// Number of descendants
    pub reply_count: usize,
    pub replies: Vec<ExportComment>,
}

impl ExportComment {
    /// Create from a comment node, replies included
    pub fn from_node(node: &CommentNode) -> Self {
        Self {
            slug: node.slug.to_string(),
            author: node.author.clone(),
            date: node.date,
            avatar: node.avatar.clone(),
            title: node.title.clone(),
            content: node.content.clone(),
            reply_count: node.count_replies(),
            replies: node.replies.iter().map(ExportComment::from_node).collect(),
        }
    }
}
