//! Avatar resolution
//!
//! An avatar is optional: a resolver returning `None` means the comment is
//! rendered without one.

use crate::config::AvatarConfig;
use crate::metadata::{self, Metadata};
use std::collections::BTreeMap;

/// Resolves the avatar of a comment from its name and metadata
pub trait AvatarResolver {
    /// `name` is the comment file name without its extension
    fn resolve(&self, name: &str, metadata: &Metadata) -> Option<String>;
}

impl<F> AvatarResolver for F
where
    F: Fn(&str, &Metadata) -> Option<String>,
{
    fn resolve(&self, name: &str, metadata: &Metadata) -> Option<String> {
        self(name, metadata)
    }
}

/// Resolver that never yields an avatar
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAvatars;

impl AvatarResolver for NoAvatars {
    fn resolve(&self, _name: &str, _metadata: &Metadata) -> Option<String> {
        None
    }
}

/// Resolver driven by [`AvatarConfig`]
#[derive(Debug, Clone)]
pub struct ConfiguredAvatars {
    url_prefix: String,
    identicons: bool,
    output_path: String,
    authors: BTreeMap<String, String>,
}

impl ConfiguredAvatars {
    /// Create a resolver from configuration
    pub fn new(config: &AvatarConfig) -> Self {
        Self {
            url_prefix: config.url_prefix.trim_end_matches('/').to_string(),
            identicons: config.identicons,
            output_path: config.output_path.trim_matches('/').to_string(),
            authors: config.authors.clone(),
        }
    }

    fn join(&self, path: &str) -> String {
        if is_url(path) || self.url_prefix.is_empty() {
            return path.to_string();
        }
        format!("{}/{}", self.url_prefix, path.trim_start_matches('/'))
    }

    fn identicon(&self, name: &str, metadata: &Metadata) -> String {
        let key = metadata
            .get(metadata::EMAIL)
            .or_else(|| metadata.get(metadata::AUTHOR))
            .unwrap_or(name);
        let hash = blake3::hash(key.trim().to_lowercase().as_bytes());
        self.join(&format!("{}/{}.png", self.output_path, &hash.to_hex()[..16]))
    }
}

impl AvatarResolver for ConfiguredAvatars {
    fn resolve(&self, name: &str, metadata: &Metadata) -> Option<String> {
        if let Some(avatar) = metadata.get(metadata::AVATAR).filter(|a| !a.trim().is_empty()) {
            return Some(self.join(avatar.trim()));
        }

        if let Some(path) = metadata
            .get(metadata::AUTHOR)
            .and_then(|author| self.authors.get(author))
        {
            return Some(self.join(path));
        }

        if self.identicons {
            return Some(self.identicon(name, metadata));
        }

        None
    }
}

fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
