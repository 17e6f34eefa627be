//! Core library for vaultsweep: finds attachments in a markdown vault that are
//! no longer referenced by any document.
//!
//! The scan pipeline is a one-direction data flow: vault inventory + document
//! bodies -> link extraction -> resolution -> aggregation into a used-path set
//! -> set difference against the inventory -> exclusion filter. Each scan is a
//! pure read pass over an immutable vault snapshot; deletion happens strictly
//! afterwards via [`delete`].

pub mod config;
pub mod delete;
pub mod exclude;
pub mod frontmatter;
pub mod scan;
pub mod vault;

pub use exclude::ExclusionRule;
pub use scan::{UnusedReport, compute_unused_attachments};
pub use vault::{AttachmentRecord, Document, DocumentKind, FsVault, ScanMode, VaultSource};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
