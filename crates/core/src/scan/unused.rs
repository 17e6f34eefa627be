//! Unused-set calculation and the outward scan entry point.

use std::collections::HashSet;

use super::aggregator::collect_used_paths;
use crate::exclude::ExclusionRule;
use crate::vault::{AttachmentRecord, ScanMode, VaultSource};

/// Final report of one unused-attachment scan.
#[derive(Debug)]
pub struct UnusedReport {
    /// Attachments with zero resolved references, exclusion rules applied,
    /// in inventory order.
    pub unused: Vec<AttachmentRecord>,
    /// Documents that could not be fully scanned. Callers should treat an
    /// empty result as "nothing unused" only when this is zero.
    pub warnings: u32,
}

/// Attachments present in the inventory but absent from the used set.
/// Pure set difference; inventory order is preserved.
pub fn find_unused(
    inventory: Vec<AttachmentRecord>,
    used: &HashSet<String>,
) -> Vec<AttachmentRecord> {
    inventory.into_iter().filter(|a| !used.contains(&a.path)).collect()
}

/// Compute the unused attachments for one vault snapshot.
///
/// Pure with respect to the vault: no side effects, and re-running over an
/// unchanged vault yields the same result. Deletion-time callers should
/// re-check [`ExclusionRule::is_excluded`] per file, since the vault may
/// change between listing and deletion.
pub fn compute_unused_attachments(
    source: &dyn VaultSource,
    mode: ScanMode,
    rule: &ExclusionRule,
) -> UnusedReport {
    let outcome = collect_used_paths(source);

    let unused = find_unused(source.attachments(mode), &outcome.used)
        .into_iter()
        .filter(|a| !rule.is_excluded(a))
        .collect();

    UnusedReport { unused, warnings: outcome.warnings }
}
