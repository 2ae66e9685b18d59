//! Exporter trait and manager

use crate::comment::CommentThread;
use crate::error::{Result, StaticCommentsError};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Trait for thread exporters
pub trait Exporter {
    /// Export a thread to string
    fn export(&self, thread: &CommentThread) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        manager.register(Box::new(super::json::JsonExporter::pretty()));
        manager.register(Box::new(super::json::JsonExporter::compact()));
        manager.register(Box::new(super::markdown::MarkdownExporter::new()));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    fn exporter(&self, format: &str) -> Result<&dyn Exporter> {
        self.get(format).ok_or_else(|| {
            StaticCommentsError::Validation(format!("Unknown export format: {}", format))
        })
    }

    /// Export a thread to the specified format
    pub fn export(&self, thread: &CommentThread, format: &str) -> Result<String> {
        self.exporter(format)?.export(thread)
    }

    /// Export a thread to a file, returning the path written
    ///
    /// The format's extension is added when `path` has none.
    pub fn export_to_file(
        &self,
        thread: &CommentThread,
        format: &str,
        path: &Path,
    ) -> Result<PathBuf> {
        let exporter = self.exporter(format)?;
        let content = exporter.export(thread)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        // Atomic write: unique temp file beside the target, removed on drop if not persisted
        let dir = match final_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        temp.flush()?;
        temp.persist(&final_path)
            .map_err(|e| StaticCommentsError::Io(e.error))?;

        debug!("Exported '{}' as {} to {:?}", thread.article, format, final_path);
        Ok(final_path)
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
