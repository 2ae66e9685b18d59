//! File system comment source
//!
//! Layout: `<root>/<article-slug>/<comment files>`.

use crate::reader::parse_comment;
use sc_core::config::{Config, MissingMetadataPolicy};
use sc_core::error::{Result, StaticCommentsError};
use sc_core::{CommentFactory, CommentNode, CommentThread};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Reads comment threads from a directory tree
pub struct FileSystemSource {
    /// Directory holding one subdirectory per article
    root: PathBuf,
    /// Builds comments from parsed files
    factory: CommentFactory,
    /// Extensions of files read as comments
    extensions: Vec<String>,
    /// What to do with files missing mandatory metadata
    policy: MissingMetadataPolicy,
}

impl FileSystemSource {
    /// Create a source over `root`
    pub fn new(
        root: impl Into<PathBuf>,
        factory: CommentFactory,
        policy: MissingMetadataPolicy,
    ) -> Self {
        Self {
            root: root.into(),
            factory,
            extensions: vec!["md".to_string(), "markdown".to_string(), "txt".to_string()],
            policy,
        }
    }

    /// Create a source from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let factory = CommentFactory::from_config(config)?;
        Ok(Self::new(
            config.comments.source_dir.clone(),
            factory,
            config.comments.on_missing_metadata,
        )
        .with_extensions(config.comments.extensions.clone()))
    }

    /// Replace the accepted file extensions
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the comment factory
    pub fn factory(&self) -> &CommentFactory {
        &self.factory
    }

    /// Slugs of all articles that have a comment directory, sorted
    pub fn articles(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            debug!("Comment root {:?} does not exist", self.root);
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| {
            StaticCommentsError::Io(e)
                .with_context(format!("Failed to read comment root {}", self.root.display()))
        })?;

        let mut articles = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_dir() || is_hidden(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                articles.push(name.to_string());
            }
        }

        articles.sort();
        Ok(articles)
    }

    /// Load, assemble and sort the thread of one article
    ///
    /// An article without a comment directory has an empty thread. The
    /// article must be a single directory name below the root.
    pub fn load_article(&self, article: &str) -> Result<CommentThread> {
        validate_article(article)?;
        let dir = self.root.join(article);
        if !dir.is_dir() {
            debug!("No comments for '{}'", article);
            return Ok(CommentThread::new(article));
        }

        let mut comments = Vec::new();
        for path in self.comment_files(&dir)? {
            match self.read_comment(&path) {
                Ok(comment) => comments.push(comment),
                Err(e) if e.is_missing_metadata() && self.policy == MissingMetadataPolicy::Skip => {
                    warn!("Skipping {}: {}", path.display(), e);
                }
                Err(e) => {
                    return Err(e.with_context(format!("Failed to load comments for '{}'", article)))
                }
            }
        }

        let mut thread = CommentThread::assemble(article, comments);
        thread.sort();

        info!(
            "Loaded {} comments ({} threads) for '{}'",
            thread.count(),
            thread.root_count(),
            article
        );
        Ok(thread)
    }

    /// Load every article's thread
    pub fn load_all(&self) -> Result<Vec<CommentThread>> {
        self.articles()?
            .iter()
            .map(|article| self.load_article(article))
            .collect()
    }

    /// Read and build a single comment file
    pub fn read_comment(&self, path: &Path) -> Result<CommentNode> {
        let text = fs::read_to_string(path).map_err(|e| {
            StaticCommentsError::Io(e).with_context(format!("Failed to read {}", path.display()))
        })?;
        let parsed = parse_comment(&text);
        self.factory.create(path, parsed.metadata, parsed.body)
    }

    /// Comment files of an article directory, sorted by file name
    fn comment_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| {
            StaticCommentsError::Io(e).with_context(format!("Failed to read {}", dir.display()))
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(e) => Some(e.path()),
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file() && !is_hidden(path) && self.accepts(path))
            .collect();

        files.sort();
        Ok(files)
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

fn validate_article(article: &str) -> Result<()> {
    let mut components = Path::new(article).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(StaticCommentsError::Validation(format!(
            "Invalid article name '{}': expected a single directory name",
            article
        ))),
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
