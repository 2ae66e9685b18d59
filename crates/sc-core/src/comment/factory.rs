//! Comment construction from source files
//!
//! The slug function and avatar resolver are chosen once, when the factory is
//! built, and then applied to every comment it creates.

use super::model::CommentNode;
use crate::avatar::{AvatarResolver, ConfiguredAvatars};
use crate::config::Config;
use crate::error::Result;
use crate::metadata::{self, Metadata};
use crate::slug::{SlugStrategy, Slugify};
use crate::types::CommentSlug;
use std::path::Path;
use tracing::debug;

/// Creates [`CommentNode`]s from parsed comment files
pub struct CommentFactory {
    slugifier: Box<dyn Slugify>,
    avatars: Box<dyn AvatarResolver>,
}

impl CommentFactory {
    /// Create a factory from explicit collaborators
    pub fn new(
        slugifier: impl Slugify + 'static,
        avatars: impl AvatarResolver + 'static,
    ) -> Self {
        Self {
            slugifier: Box::new(slugifier),
            avatars: Box::new(avatars),
        }
    }

    /// Create a factory from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let slugifier = SlugStrategy::from_config(&config.slug)?;
        let avatars = ConfiguredAvatars::new(&config.avatar);
        Ok(Self::new(slugifier, avatars))
    }

    /// Slug a file name would receive
    pub fn slug_for(&self, file_name: &str) -> CommentSlug {
        CommentSlug::new(self.slugifier.slugify(file_name))
    }

    /// Build a comment from its source path, metadata header and body
    ///
    /// Fails with `MissingMetadata` when `author` or `date` is absent.
    pub fn create(
        &self,
        source_path: &Path,
        metadata: Metadata,
        content: impl Into<String>,
    ) -> Result<CommentNode> {
        let name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let slug = match metadata.get(metadata::SLUG) {
            Some(explicit) => CommentSlug::new(explicit.trim()),
            None => self.slug_for(&name),
        };

        let author = metadata.require(metadata::AUTHOR, source_path)?.trim().to_string();
        let date = metadata::parse_date(metadata.require(metadata::DATE, source_path)?)
            .map_err(|e| e.with_context(format!("Bad date in {}", source_path.display())))?;

        let stem = Path::new(&name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        let avatar = self.avatars.resolve(&stem, &metadata);

        let reply_to = metadata
            .get(metadata::REPLY_TO)
            .map(str::trim)
            .filter(|parent| !parent.is_empty())
            .map(CommentSlug::from);

        debug!(
            "Created comment {} by {} from {}",
            slug,
            author,
            source_path.display()
        );

        let mut comment = CommentNode::new(slug, author, date);
        comment.avatar = avatar;
        comment.content = content.into();
        comment.reply_to = reply_to;
        comment.source_path = Some(source_path.to_path_buf());
        comment.metadata = metadata;
        Ok(comment)
    }
}

impl Default for CommentFactory {
    fn default() -> Self {
        Self::new(SlugStrategy::default(), crate::avatar::NoAvatars)
    }
}
