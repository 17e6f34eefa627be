//! Vault file inventory: discovery, typing, and the collaborator interface
//! the scan pipeline reads from.

pub mod fs;
pub mod source;
pub mod types;
pub mod walker;

pub use fs::FsVault;
pub use source::{LinkGraph, VaultSource};
pub use types::{
    AttachmentRecord, Document, DocumentKind, IMAGE_EXTENSIONS, ScanMode, is_document_path,
    is_image_extension,
};
pub use walker::{VaultWalker, VaultWalkerError, WalkedFile};
