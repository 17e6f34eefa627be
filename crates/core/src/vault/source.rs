//! The vault collaborator interface the scan pipeline reads from.

use std::collections::HashMap;
use std::io;

use super::types::{AttachmentRecord, Document, ScanMode};

/// Host-maintained resolved-link cache: document path -> target path ->
/// reference count. A performance shortcut of unknown freshness; the scan
/// merges it in but never trusts it above the direct parse.
pub type LinkGraph = HashMap<String, HashMap<String, u32>>;

/// One vault snapshot: inventory, documents, and optional host services.
///
/// Implemented by [`super::FsVault`] for on-disk vaults; tests supply
/// in-memory implementations.
pub trait VaultSource {
    /// Attachment inventory per the mode rule. Documents are never reported.
    fn attachments(&self, mode: ScanMode) -> Vec<AttachmentRecord>;

    /// Every markdown and canvas document in the vault.
    fn documents(&self) -> Vec<Document>;

    /// Raw content of one document.
    fn read_content(&self, doc: &Document) -> io::Result<String>;

    /// Every file path in the vault, used to build the resolver namespace.
    fn all_paths(&self) -> Vec<String>;

    /// Host-side shorthand resolution, when the vault has its own resolver.
    /// The built-in search runs whenever this declines.
    fn resolve_linkpath(&self, _token: &str, _source_path: &str) -> Option<String> {
        None
    }

    /// Pre-resolved link cache, when the host maintains one.
    fn link_graph(&self) -> Option<LinkGraph> {
        None
    }
}
