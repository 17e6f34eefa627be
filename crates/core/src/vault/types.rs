//! Inventory types: documents, attachments, and scan modes.

use serde::{Deserialize, Serialize};

/// Extensions recognised as images by [`ScanMode::Image`].
pub const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "svg", "bmp", "webp"];

/// Which attachments an inventory pass should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Only files with a known image extension.
    Image,
    /// Every non-document file.
    All,
}

impl ScanMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "image" | "images" => Some(Self::Image),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::All => "all",
        }
    }
}

/// Kind of document that can reference attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Markdown note with optional YAML frontmatter.
    Markdown,
    /// JSON canvas board.
    Canvas,
}

/// A document in the vault, identified by its vault-relative path.
///
/// Immutable snapshot at scan time; bodies are read on demand through the
/// vault source, never mutated by the scan.
#[derive(Debug, Clone)]
pub struct Document {
    /// Vault-relative path with `/` separators.
    pub path: String,
    pub kind: DocumentKind,
}

impl Document {
    pub fn new(path: impl Into<String>, kind: DocumentKind) -> Self {
        Self { path: path.into(), kind }
    }
}

/// A non-document file that documents may reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentRecord {
    /// Vault-relative path with `/` separators, unique within the vault.
    pub path: String,
    /// Lowercased file extension; empty when the file has none.
    pub extension: String,
}

impl AttachmentRecord {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let extension = path
            .rsplit('/')
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        Self { path, extension }
    }

    /// Parent folder path, or `None` for files at the vault root.
    pub fn parent_folder(&self) -> Option<&str> {
        self.path.rsplit_once('/').map(|(parent, _)| parent)
    }
}

pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}

/// Documents never count as attachments, whichever mode is active.
pub fn is_document_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".md") || lower.ends_with(".canvas")
}
