//! Frontmatter parsing from markdown documents.

use super::types::{Frontmatter, ParsedDocument};
use thiserror::Error;

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` at the start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let trimmed = content.trim_start();

    // Check if document starts with frontmatter delimiter
    if !trimmed.starts_with("---") {
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    }

    let after_first = &trimmed[3..];

    // Skip the newline after opening ---
    let after_newline = after_first
        .strip_prefix('\n')
        .or_else(|| after_first.strip_prefix("\r\n"))
        .unwrap_or(after_first);

    if let Some(end_pos) = find_closing_delimiter(after_newline) {
        let yaml_content = &after_newline[..end_pos];

        // Skip closing --- and following newline
        let after_closing = &after_newline[end_pos + 3..];
        let body = after_closing
            .strip_prefix('\n')
            .or_else(|| after_closing.strip_prefix("\r\n"))
            .unwrap_or(after_closing)
            .to_string();

        let frontmatter: Frontmatter = if yaml_content.trim().is_empty() {
            Frontmatter::default()
        } else {
            serde_yaml::from_str(yaml_content.trim())?
        };

        Ok(ParsedDocument { frontmatter: Some(frontmatter), body })
    } else {
        // No closing ---, treat as no frontmatter
        Ok(ParsedDocument { frontmatter: None, body: content.to_string() })
    }
}

/// Find the position of closing `---` delimiter.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    // Look for --- at the start of a line
    for (i, line) in content.lines().enumerate() {
        if line.trim() == "---" {
            let pos: usize = content
                .lines()
                .take(i)
                .map(|l| l.len() + 1) // +1 for newline
                .sum();
            return Some(pos);
        }
    }
    None
}
