//! Comment file parsing
//!
//! A comment file starts with a header of `Key: value` lines, optionally
//! fenced by `---` lines. The header ends at the first blank line, the
//! closing fence, or the first line that is not a `Key: value` pair.
//! Everything after it is the body.
//!
//! ```text
//! author: Ada
//! date: 2020-05-17 14:30
//! replyto: comment-1md
//!
//! Thanks for the write-up!
//! ```

use sc_core::Metadata;

/// Header and body of a comment file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedComment {
    pub metadata: Metadata,
    pub body: String,
}

/// Split a comment file into metadata and body
pub fn parse_comment(text: &str) -> ParsedComment {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().peekable();
    let mut metadata = Metadata::new();

    let fenced = lines.peek().map(|l| l.trim() == "---").unwrap_or(false);
    if fenced {
        lines.next();
    }

    let mut body_lines: Vec<&str> = Vec::new();
    for line in lines.by_ref() {
        let trimmed = line.trim();
        if trimmed.is_empty() || (fenced && trimmed == "---") {
            break;
        }
        match split_header_line(line) {
            Some((key, value)) => {
                metadata.insert(key, value);
            }
            None => {
                body_lines.push(line);
                break;
            }
        }
    }
    body_lines.extend(lines);

    ParsedComment {
        metadata,
        body: body_lines.join("\n").trim().to_string(),
    }
}

fn split_header_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    valid_key.then_some((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_header_and_body() {
        let parsed = parse_comment(
            "Author: Ada\ndate: 2020-05-17 14:30\nreplyto: c1md\n\nThanks!\n\nSecond line: with colon\n",
        );

        assert_eq!(parsed.metadata.get("author"), Some("Ada"));
        assert_eq!(parsed.metadata.get("date"), Some("2020-05-17 14:30"));
        assert_eq!(parsed.metadata.get("replyto"), Some("c1md"));
        assert_eq!(parsed.body, "Thanks!\n\nSecond line: with colon");
    }

    #[test]
    fn test_parse_fenced_header() {
        let parsed = parse_comment("---\nauthor: Ada\ndate: 2020-01-01\n---\nBody text\n");
        assert_eq!(parsed.metadata.len(), 2);
        assert_eq!(parsed.body, "Body text");
    }

    #[test]
    fn test_value_may_contain_colons() {
        let parsed = parse_comment("avatar: https://example.com/a.png\n\nhi");
        assert_eq!(parsed.metadata.get("avatar"), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_non_header_line_starts_body() {
        let parsed = parse_comment("author: Ada\nJust writing here.\nMore.");
        assert_eq!(parsed.metadata.len(), 1);
        assert_eq!(parsed.body, "Just writing here.\nMore.");
    }

    #[test]
    fn test_no_header() {
        let parsed = parse_comment("\nOnly a body");
        assert!(parsed.metadata.is_empty());
        assert_eq!(parsed.body, "Only a body");
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let parsed = parse_comment("\u{feff}author: Ada\n\nx");
        assert_eq!(parsed.metadata.get("author"), Some("Ada"));
    }
}
