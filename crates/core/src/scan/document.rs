//! Walks a document's structured regions (frontmatter, body, canvas graph)
//! and feeds the relevant string values through the link extractor.

use serde_yaml::Value;
use tracing::warn;

use super::canvas::CanvasData;
use super::extractor::{LinkKind, LinkMatch, extract_links, path_is_image};
use crate::frontmatter;

/// Matches collected from one document, plus the number of regions that could
/// not be parsed.
#[derive(Debug, Default)]
pub struct DocumentLinks {
    pub matches: Vec<LinkMatch>,
    pub warnings: u32,
}

/// Collect every link match from a markdown document. Frontmatter and body
/// are scanned independently; both contribute to the same match list.
///
/// A YAML parse failure is recoverable: the warning count goes up and the raw
/// content is scanned as body text, so references inside it still count as
/// used rather than becoming deletion candidates.
pub fn collect_markdown_links(content: &str) -> DocumentLinks {
    let mut out = DocumentLinks::default();

    match frontmatter::parse(content) {
        Ok(parsed) => {
            if let Some(fm) = &parsed.frontmatter {
                for value in fm.fields.values() {
                    collect_frontmatter_value(value, &mut out.matches);
                }
            }
            out.matches.extend(extract_links(&parsed.body));
        }
        Err(e) => {
            warn!("malformed frontmatter, scanning raw content: {e}");
            out.warnings += 1;
            out.matches.extend(extract_links(content));
        }
    }

    out
}

/// Frontmatter often stores a bare path rather than a full link, so next to
/// the regular extraction an image-extension suffix counts as a direct target.
/// Only string values are inspected; lists and maps are left alone.
fn collect_frontmatter_value(value: &Value, matches: &mut Vec<LinkMatch>) {
    let Some(s) = value.as_str() else { return };

    matches.extend(extract_links(s));

    if path_is_image(s) {
        matches.push(LinkMatch::new(s.trim(), LinkKind::FrontmatterPath));
    }
}

/// Collect link matches from a canvas document's raw JSON content.
///
/// `file` nodes name their target directly; `text` nodes go through the
/// extractor. A parse failure is returned to the caller, which skips the
/// canvas with a warning rather than aborting the scan.
pub fn collect_canvas_links(content: &str) -> Result<Vec<LinkMatch>, serde_json::Error> {
    let canvas: CanvasData = serde_json::from_str(content)?;
    let mut matches = Vec::new();

    for node in &canvas.nodes {
        match node.node_type.as_str() {
            "file" => {
                if let Some(file) = &node.file {
                    matches.push(LinkMatch::new(file.clone(), LinkKind::CanvasFile));
                }
            }
            "text" => {
                if let Some(text) = &node.text {
                    matches.extend(extract_links(text));
                }
            }
            _ => {}
        }
    }

    Ok(matches)
}
