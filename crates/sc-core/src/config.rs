//! Configuration management for static-comments

use crate::error::{Result, StaticCommentsError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default regex substitutions applied by the modern slug strategies
pub fn default_regex_substitutions() -> Vec<(String, String)> {
    vec![
        (r"[^\w\s-]".to_string(), String::new()),
        (r"\A\s*".to_string(), String::new()),
        (r"\s*\z".to_string(), String::new()),
        (r"[-\s]+".to_string(), "-".to_string()),
    ]
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comment source settings
    pub comments: CommentsConfig,
    /// Identifier derivation settings
    pub slug: SlugConfig,
    /// Avatar resolution settings
    pub avatar: AvatarConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StaticCommentsError::Io(e)
                .with_context(format!("Failed to read config {}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| StaticCommentsError::Toml(e.to_string()))
    }

    /// Serialize configuration to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StaticCommentsError::Toml(e.to_string()))
    }
}

/// What to do with a comment file that lacks `author` or `date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingMetadataPolicy {
    /// Log a warning and leave the file out
    #[default]
    Skip,
    /// Abort loading with the error
    Fail,
}

/// Comment source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// Root directory holding one subdirectory per article
    pub source_dir: PathBuf,
    /// File extensions read as comments
    pub extensions: Vec<String>,
    /// Policy for files missing mandatory metadata
    pub on_missing_metadata: MissingMetadataPolicy,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("comments"),
            extensions: vec!["md".to_string(), "markdown".to_string(), "txt".to_string()],
            on_missing_metadata: MissingMetadataPolicy::Skip,
        }
    }
}

/// Which slug function shape to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlugApi {
    /// Decide from the other settings
    #[default]
    Auto,
    /// Regex substitutions with case and unicode options
    Modern,
    /// Regex substitutions only
    RegexOnly,
    /// Literal replacements followed by fixed cleanup
    Legacy,
}

/// Identifier derivation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Slug function shape
    pub api: SlugApi,
    /// Ordered `(pattern, replacement)` regex substitutions; defaults apply when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex_substitutions: Option<Vec<(String, String)>>,
    /// Keep the original letter case
    pub preserve_case: bool,
    /// Keep non-ASCII characters
    pub use_unicode: bool,
    /// Ordered `[from, to]` or `[from, to, skip]` literal replacements for the legacy strategy
    pub legacy_substitutions: Vec<LegacySubstitution>,
}

/// Literal replacement of the legacy slug strategy
///
/// When `skip` is set and the replacement matched, the `[^\w\s-]` cleanup
/// is not applied to the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LegacySubstitutionRepr", into = "LegacySubstitutionRepr")]
pub struct LegacySubstitution {
    pub from: String,
    pub to: String,
    pub skip: bool,
}

impl LegacySubstitution {
    /// Replacement followed by the usual cleanup
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            skip: false,
        }
    }

    /// Replacement that suppresses the cleanup when it matches
    pub fn skipping_cleanup(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            skip: true,
            ..Self::new(from, to)
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LegacySubstitutionRepr {
    WithSkip(String, String, bool),
    Plain(String, String),
}

impl From<LegacySubstitutionRepr> for LegacySubstitution {
    fn from(repr: LegacySubstitutionRepr) -> Self {
        match repr {
            LegacySubstitutionRepr::WithSkip(from, to, skip) => Self { from, to, skip },
            LegacySubstitutionRepr::Plain(from, to) => Self::new(from, to),
        }
    }
}

impl From<LegacySubstitution> for LegacySubstitutionRepr {
    fn from(sub: LegacySubstitution) -> Self {
        if sub.skip {
            LegacySubstitutionRepr::WithSkip(sub.from, sub.to, true)
        } else {
            LegacySubstitutionRepr::Plain(sub.from, sub.to)
        }
    }
}

impl SlugConfig {
    /// Regex substitutions in effect
    pub fn effective_regex_substitutions(&self) -> Vec<(String, String)> {
        self.regex_substitutions
            .clone()
            .unwrap_or_else(default_regex_substitutions)
    }
}

/// Avatar resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Prefix joined onto relative avatar paths
    pub url_prefix: String,
    /// Resolve a generated identicon path when nothing else matches
    pub identicons: bool,
    /// Directory (relative to the site root) of generated identicons
    pub output_path: String,
    /// Fixed avatars by author name
    pub authors: BTreeMap<String, String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            url_prefix: String::new(),
            identicons: false,
            output_path: "images/identicon".to_string(),
            authors: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.comments.source_dir, PathBuf::from("comments"));
        assert_eq!(config.comments.on_missing_metadata, MissingMetadataPolicy::Skip);
        assert_eq!(config.slug.api, SlugApi::Auto);
        assert!(!config.avatar.identicons);
        assert_eq!(config.slug.effective_regex_substitutions().len(), 4);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[comments]"));
        assert!(toml.contains("[slug]"));
        assert!(toml.contains("[avatar]"));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config.comments.extensions, config2.comments.extensions);
        assert!(config2.slug.regex_substitutions.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [comments]
            on_missing_metadata = "fail"

            [slug]
            api = "regex-only"
            legacy_substitutions = [["+", "plus"], ["c#", "csharp", true]]

            [avatar.authors]
            Ada = "ada.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.comments.on_missing_metadata, MissingMetadataPolicy::Fail);
        assert_eq!(config.comments.extensions.len(), 3);
        assert_eq!(config.slug.api, SlugApi::RegexOnly);
        assert_eq!(
            config.slug.legacy_substitutions,
            vec![
                LegacySubstitution::new("+", "plus"),
                LegacySubstitution::skipping_cleanup("c#", "csharp"),
            ]
        );
        assert_eq!(config.avatar.authors.get("Ada").map(String::as_str), Some("ada.png"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[comments\n").unwrap_err();
        assert!(matches!(err, StaticCommentsError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[avatar]\nidenticons = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.avatar.identicons);
    }
}
