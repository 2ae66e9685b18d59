//! Comment builder for fluent API

use super::model::CommentNode;
use crate::error::{Result, StaticCommentsError};
use crate::metadata::{self, Metadata};
use crate::types::CommentSlug;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Builder for creating comments without reading a source file
pub struct CommentBuilder {
    slug: CommentSlug,
    author: Option<String>,
    date: Option<DateTime<Utc>>,
    avatar: Option<String>,
    content: String,
    reply_to: Option<CommentSlug>,
    source_path: Option<PathBuf>,
    metadata: Metadata,
    replies: Vec<CommentNode>,
}

impl CommentBuilder {
    /// Create a new builder for the given slug
    pub fn new(slug: impl Into<CommentSlug>) -> Self {
        Self {
            slug: slug.into(),
            author: None,
            date: None,
            avatar: None,
            content: String::new(),
            reply_to: None,
            source_path: None,
            metadata: Metadata::new(),
            replies: Vec::new(),
        }
    }

    /// Set the author
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the date
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the avatar path or URL
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Set the body
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Mark as a reply to another comment
    pub fn reply_to(mut self, parent: impl Into<CommentSlug>) -> Self {
        self.reply_to = Some(parent.into());
        self
    }

    /// Record the source file
    pub fn source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Attach extra metadata
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add an already built reply
    pub fn reply(mut self, reply: CommentNode) -> Self {
        self.replies.push(reply);
        self
    }

    /// Build the comment
    pub fn build(self) -> Result<CommentNode> {
        let path = self
            .source_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.slug.as_str()));

        let author = self.author.ok_or_else(|| StaticCommentsError::MissingMetadata {
            field: metadata::AUTHOR.to_string(),
            path: path.clone(),
        })?;
        let date = self.date.ok_or(StaticCommentsError::MissingMetadata {
            field: metadata::DATE.to_string(),
            path,
        })?;

        let mut comment = CommentNode::new(self.slug, author, date);
        comment.avatar = self.avatar;
        comment.content = self.content;
        comment.reply_to = self.reply_to;
        comment.source_path = self.source_path;
        comment.metadata = self.metadata;
        for reply in self.replies {
            comment.add_reply(reply);
        }

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_basic_builder() {
        let comment = CommentBuilder::new("c1md")
            .author("Ada")
            .date(date())
            .content("Hello")
            .build()
            .unwrap();

        assert_eq!(comment.slug, "c1md");
        assert_eq!(comment.author, "Ada");
        assert_eq!(comment.content, "Hello");
        assert_eq!(comment.title, "Posted by:  Ada");
        assert!(comment.avatar.is_none());
        assert!(comment.replies.is_empty());
    }

    #[test]
    fn test_builder_with_replies() {
        let reply = CommentBuilder::new("r1md")
            .author("Grace")
            .date(date())
            .reply_to("c1md")
            .build()
            .unwrap();
        let comment = CommentBuilder::new("c1md")
            .author("Ada")
            .date(date())
            .avatar("ada.png")
            .reply(reply)
            .build()
            .unwrap();

        assert_eq!(comment.count_replies(), 1);
        assert_eq!(comment.avatar.as_deref(), Some("ada.png"));
        assert_eq!(
            comment.get_reply("r1md").and_then(|r| r.reply_to.clone()),
            Some(CommentSlug::from("c1md"))
        );
    }

    #[test]
    fn test_builder_without_date_fails() {
        let result = CommentBuilder::new("c1md").author("Ada").build();
        assert!(matches!(
            result,
            Err(StaticCommentsError::MissingMetadata { ref field, .. }) if field == "date"
        ));
    }

    #[test]
    fn test_builder_without_author_fails() {
        let result = CommentBuilder::new("c1md")
            .date(date())
            .source_path("comments/post/c1.md")
            .build();
        match result {
            Err(StaticCommentsError::MissingMetadata { field, path }) => {
                assert_eq!(field, "author");
                assert_eq!(path, PathBuf::from("comments/post/c1.md"));
            }
            other => panic!("expected missing author, got {:?}", other),
        }
    }
}
