//! sc-core - Core library for static-comments
//!
//! This crate provides the threaded comment model used by static site builds:
//! the reply tree, construction of comments from parsed source files, slug and
//! avatar resolution, per-article thread assembly, and export of finished
//! threads for rendering.

pub mod avatar;
pub mod comment;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod metadata;
pub mod slug;
pub mod types;

pub use comment::{CommentBuilder, CommentFactory, CommentNode, CommentThread};
pub use content::Content;
pub use error::{Result, StaticCommentsError};
pub use metadata::Metadata;
pub use types::*;
