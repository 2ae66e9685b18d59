//! Export functionality for comment threads
//!
//! Renders finished (assembled and sorted) threads for templating layers.
//!
//! # Overview
//!
//! Export functionality supports:
//! - JSON format (pretty and compact)
//! - Markdown format (nested blockquotes, one level per reply depth)
//!
//! # Example
//!
//! ```ignore
//! use sc_core::export::ExportManager;
//!
//! let manager = ExportManager::new();
//! let json = manager.export(&thread, "json")?;
//! let md = manager.export(&thread, "markdown")?;
//! ```

mod exporter;
mod json;
mod markdown;

pub use exporter::{ExportManager, Exporter};
pub use json::{ExportComment, ExportThread, JsonExporter};
pub use markdown::MarkdownExporter;
