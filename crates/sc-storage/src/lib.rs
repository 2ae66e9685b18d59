//! sc-storage - Comment source reading for static-comments
//!
//! This crate reads comment files from a directory tree and turns them into
//! per-article threads.

mod reader;
mod source;

pub use reader::{parse_comment, ParsedComment};
pub use source::FileSystemSource;
