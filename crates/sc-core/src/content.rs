//! Renderable content capability
//!
//! The minimal surface a rendering layer needs from an item of site content.

use chrono::{DateTime, Utc};

/// A content item that can be rendered
pub trait Content {
    /// Address of the item within its collection
    fn identifier(&self) -> &str;

    /// Who wrote it
    fn author(&self) -> &str;

    /// When it was written
    fn date(&self) -> DateTime<Utc>;

    /// Rendered body
    fn body(&self) -> &str;

    /// Display title
    fn title(&self) -> String {
        format!("Posted by:  {}", self.author())
    }
}
