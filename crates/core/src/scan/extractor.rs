//! Link target extraction from one unit of text.
//!
//! A unit is a markdown body, a single frontmatter value, or a canvas text
//! node; the extractor is syntax-aware but knows nothing about the vault.

use std::sync::LazyLock;

use regex::Regex;

use crate::vault::is_image_extension;

/// Kind of reference syntax a match came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `[[target]]`
    Wikilink,
    /// `![[target]]`
    Embed,
    /// `[label](target)` or `![label](target)`
    Markdown,
    /// Bare image path in a frontmatter value.
    FrontmatterPath,
    /// `file` field of a canvas file node.
    CanvasFile,
}

/// A raw link target pulled out of text, prior to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Target text with alias and heading suffixes stripped, percent-decoded
    /// for markdown links.
    pub link_text: String,
    pub kind: LinkKind,
}

impl LinkMatch {
    pub fn new(link_text: impl Into<String>, kind: LinkKind) -> Self {
        Self { link_text: link_text.into(), kind }
    }
}

// Regex patterns for link extraction
static WIKI_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches [[target]] and ![[target]], including [[target|alias]]
    // and [[target#heading]] forms; suffixes are stripped afterwards.
    Regex::new(r"(!)?\[\[([^\[\]]+?)\]\]").unwrap()
});

static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches [label](target) and ![label](target)
    Regex::new(r"(!)?\[([^\[\]]*)\]\(([^()]+)\)").unwrap()
});

static EXTERNAL_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Any scheme-prefixed target (http://, https://, obsidian://, ...)
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://").unwrap()
});

/// Extract every link target from a block of text, across all supported
/// syntaxes. Matches on the same line are each reported; malformed brackets
/// simply yield no match.
pub fn extract_links(text: &str) -> Vec<LinkMatch> {
    let mut matches = Vec::new();

    for cap in WIKI_RE.captures_iter(text) {
        let raw = cap.get(2).map(|m| m.as_str()).unwrap_or("");
        if let Some(target) = clean_wiki_target(raw) {
            let kind = if cap.get(1).is_some() { LinkKind::Embed } else { LinkKind::Wikilink };
            matches.push(LinkMatch::new(target, kind));
        }
    }

    for cap in MARKDOWN_LINK_RE.captures_iter(text) {
        let raw = cap.get(3).map(|m| m.as_str()).unwrap_or("");
        if let Some(target) = clean_markdown_target(raw) {
            matches.push(LinkMatch::new(target, LinkKind::Markdown));
        }
    }

    matches
}

/// Strip the display alias (after `|`) and heading/block reference (after `#`)
/// from a wiki target.
fn clean_wiki_target(raw: &str) -> Option<String> {
    let target = raw.split('|').next().unwrap_or("");
    let target = target.split('#').next().unwrap_or("").trim();
    if target.is_empty() { None } else { Some(target.to_string()) }
}

/// Decode a markdown link target; external URLs never resolve to a vault
/// attachment and are dropped here.
fn clean_markdown_target(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || EXTERNAL_URL_RE.is_match(raw) {
        return None;
    }

    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    };

    let target = decoded.split('#').next().unwrap_or("").trim();
    if target.is_empty() { None } else { Some(target.to_string()) }
}

/// Whether a bare token is a path to an image, for frontmatter values that
/// store a path without any link syntax.
pub fn path_is_image(token: &str) -> bool {
    token
        .trim()
        .rsplit_once('.')
        .is_some_and(|(_, ext)| is_image_extension(ext))
}
