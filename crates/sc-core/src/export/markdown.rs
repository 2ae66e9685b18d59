//! Markdown exporter for threads

use super::exporter::Exporter;
use crate::comment::{CommentNode, CommentThread};
use crate::content::Content;
use crate::error::Result;

/// Markdown exporter
///
/// Each comment is a blockquote; replies are nested one level deeper.
pub struct MarkdownExporter {
    /// Date format for comment headers
    date_format: String,
    /// Include avatar images
    include_avatars: bool,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new() -> Self {
        Self {
            date_format: "%Y-%m-%d %H:%M".to_string(),
            include_avatars: true,
        }
    }

    /// Set the date format (chrono `strftime` syntax)
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set whether to include avatar images
    pub fn with_avatars(mut self, include: bool) -> Self {
        self.include_avatars = include;
        self
    }

    /// Render the report header
    fn render_header(&self, thread: &CommentThread) -> String {
        let mut header = format!("# Comments on `{}`\n\n", thread.article);
        let total = thread.count();
        header.push_str(&format!(
            "**{} comment{}**\n\n",
            total,
            if total == 1 { "" } else { "s" }
        ));
        header
    }

    /// Render one content item as quoted lines at the given depth
    fn render_entry(&self, item: &dyn Content, avatar: Option<&str>, depth: usize) -> String {
        let prefix = "> ".repeat(depth + 1);
        let mut out = String::new();

        out.push_str(&format!(
            "{}**{}** · {} · `{}`\n",
            prefix,
            item.title(),
            item.date().format(&self.date_format),
            item.identifier()
        ));

        if self.include_avatars {
            if let Some(avatar) = avatar {
                out.push_str(&format!("{}![{}]({})\n", prefix, item.author(), avatar));
            }
        }

        let quote = prefix.trim_end();
        out.push_str(quote);
        out.push('\n');
        for line in item.body().lines() {
            if line.trim().is_empty() {
                out.push_str(quote);
            } else {
                out.push_str(&prefix);
                out.push_str(line);
            }
            out.push('\n');
        }

        out
    }

    fn render_node(&self, node: &CommentNode, depth: usize, out: &mut String) {
        out.push_str(&self.render_entry(node, node.avatar.as_deref(), depth));
        for reply in &node.replies {
            out.push_str("> ".repeat(depth + 1).trim_end());
            out.push('\n');
            self.render_node(reply, depth + 1, out);
        }
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, thread: &CommentThread) -> Result<String> {
        let mut output = self.render_header(thread);

        if thread.is_empty() {
            output.push_str("_No comments yet._\n");
            return Ok(output);
        }

        for root in &thread.roots {
            self.render_node(root, 0, &mut output);
            output.push('\n');
        }

        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
