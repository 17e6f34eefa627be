//! Full-vault reference aggregation into the used-attachment set.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::document::{collect_canvas_links, collect_markdown_links};
use super::resolver::LinkResolver;
use crate::vault::{Document, DocumentKind, VaultSource, is_document_path};

/// Result of one aggregation pass over the vault.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Every attachment path referenced by at least one document.
    pub used: HashSet<String>,
    /// Number of documents that could not be fully scanned. Nonzero means the
    /// used set may be incomplete.
    pub warnings: u32,
}

/// Walk every document in the vault and collect the set of used attachment
/// paths. Two independent sources feed the set: the host's pre-resolved link
/// graph when one exists, and a direct re-parse of every document, which
/// stays correct regardless of the graph's freshness. Duplicates are free.
pub fn collect_used_paths(source: &dyn VaultSource) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let resolver = LinkResolver::new(source.all_paths());

    if let Some(graph) = source.link_graph() {
        for targets in graph.values() {
            for target in targets.keys() {
                if !is_document_path(target) {
                    outcome.used.insert(target.clone());
                }
            }
        }
    }

    for doc in source.documents() {
        scan_document(source, &resolver, &doc, &mut outcome);
    }

    outcome
}

fn scan_document(
    source: &dyn VaultSource,
    resolver: &LinkResolver,
    doc: &Document,
    outcome: &mut ScanOutcome,
) {
    let content = match source.read_content(doc) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %doc.path, "failed to read document: {e}");
            outcome.warnings += 1;
            return;
        }
    };

    let matches = match doc.kind {
        DocumentKind::Markdown => {
            let links = collect_markdown_links(&content);
            outcome.warnings += links.warnings;
            links.matches
        }
        DocumentKind::Canvas => match collect_canvas_links(&content) {
            Ok(matches) => matches,
            Err(e) => {
                warn!(path = %doc.path, "skipping malformed canvas: {e}");
                outcome.warnings += 1;
                return;
            }
        },
    };

    for m in matches {
        let resolved = source
            .resolve_linkpath(&m.link_text, &doc.path)
            .or_else(|| resolver.resolve(&m.link_text, &doc.path));

        // Only non-document targets count as used attachments.
        if let Some(path) = resolved {
            if !is_document_path(&path) {
                debug!(source = %doc.path, target = %path, "resolved reference");
                outcome.used.insert(path);
            }
        }
    }
}
