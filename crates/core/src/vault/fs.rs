//! Filesystem-backed vault source.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::source::VaultSource;
use super::types::{
    AttachmentRecord, Document, DocumentKind, ScanMode, is_document_path, is_image_extension,
};
use super::walker::{VaultWalker, VaultWalkerError, WalkedFile};

/// A vault rooted in a directory on disk. The file listing is taken once at
/// open time; the scan operates on that snapshot.
#[derive(Debug)]
pub struct FsVault {
    root: PathBuf,
    files: Vec<WalkedFile>,
}

impl FsVault {
    /// Walk the directory and capture the vault snapshot.
    pub fn open(root: &Path) -> Result<Self, VaultWalkerError> {
        let walker = VaultWalker::new(root)?;
        let files = walker.walk()?;
        Ok(Self { root: walker.root().to_path_buf(), files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_kind(path: &str) -> Option<DocumentKind> {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".md") {
            Some(DocumentKind::Markdown)
        } else if lower.ends_with(".canvas") {
            Some(DocumentKind::Canvas)
        } else {
            None
        }
    }
}

impl VaultSource for FsVault {
    fn attachments(&self, mode: ScanMode) -> Vec<AttachmentRecord> {
        self.files
            .iter()
            .filter(|f| !is_document_path(&f.relative_path))
            .map(|f| AttachmentRecord::new(f.relative_path.clone()))
            .filter(|record| match mode {
                ScanMode::Image => is_image_extension(&record.extension),
                ScanMode::All => true,
            })
            .collect()
    }

    fn documents(&self) -> Vec<Document> {
        self.files
            .iter()
            .filter_map(|f| {
                Self::document_kind(&f.relative_path)
                    .map(|kind| Document::new(f.relative_path.clone(), kind))
            })
            .collect()
    }

    fn read_content(&self, doc: &Document) -> io::Result<String> {
        fs::read_to_string(self.root.join(&doc.path))
    }

    fn all_paths(&self) -> Vec<String> {
        self.files.iter().map(|f| f.relative_path.clone()).collect()
    }
}
