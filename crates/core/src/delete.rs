//! Deletion of unused attachments: vault trash or permanent removal.
//!
//! Runs strictly after a scan has been computed and presented, never
//! interleaved with scanning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::exclude::ExclusionRule;
use crate::vault::AttachmentRecord;

/// Folder at the vault root receiving soft-deleted files. The walker skips it.
pub const TRASH_DIR: &str = ".trash";

/// What "delete" means for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Move into the vault's `.trash` folder, preserving the relative path.
    #[default]
    Trash,
    /// Remove from disk.
    Permanent,
}

impl DeleteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trash => "trash",
            Self::Permanent => "permanent",
        }
    }
}

/// Outcome of one deletion batch.
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// Paths deleted (or moved to trash).
    pub deleted: Vec<String>,
    /// Candidates kept because an exclusion rule matched at deletion time.
    pub excluded: Vec<String>,
    /// Per-file failures as (path, error message).
    pub failed: Vec<(String, String)>,
}

/// Delete the given attachments. Exclusion is re-checked per file since the
/// vault (or the rule) may have changed since the scan; a failure on one file
/// does not abort the batch.
pub fn delete_attachments(
    root: &Path,
    records: &[AttachmentRecord],
    mode: DeleteMode,
    rule: &ExclusionRule,
) -> DeleteReport {
    let mut report = DeleteReport::default();

    for record in records {
        if rule.is_excluded(record) {
            info!(path = %record.path, "not referenced but excluded, keeping");
            report.excluded.push(record.path.clone());
            continue;
        }

        let result = match mode {
            DeleteMode::Trash => move_to_trash(root, &record.path),
            DeleteMode::Permanent => fs::remove_file(root.join(&record.path)),
        };

        match result {
            Ok(()) => report.deleted.push(record.path.clone()),
            Err(e) => {
                warn!(path = %record.path, "failed to delete: {e}");
                report.failed.push((record.path.clone(), e.to_string()));
            }
        }
    }

    report
}

/// Move one file under `<root>/.trash/<path>`. A name collision gets a
/// numeric suffix appended to the file name.
fn move_to_trash(root: &Path, path: &str) -> io::Result<()> {
    let source = root.join(path);
    let target = trash_target(root, path);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::rename(&source, &target)
}

fn trash_target(root: &Path, path: &str) -> PathBuf {
    let base = root.join(TRASH_DIR).join(path);
    if !base.exists() {
        return base;
    }

    let file_name = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());

    let mut n = 1u32;
    loop {
        let candidate = base.with_file_name(format!("{file_name}.{n}"));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vault_with(paths: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for path in paths {
            let full = dir.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, [0u8; 4]).unwrap();
        }
        dir
    }

    fn records(paths: &[&str]) -> Vec<AttachmentRecord> {
        paths.iter().map(|p| AttachmentRecord::new(*p)).collect()
    }

    #[test]
    fn test_trash_preserves_relative_path() {
        let dir = vault_with(&["assets/pic.png"]);
        let report = delete_attachments(
            dir.path(),
            &records(&["assets/pic.png"]),
            DeleteMode::Trash,
            &ExclusionRule::default(),
        );

        assert_eq!(report.deleted, vec!["assets/pic.png"]);
        assert!(!dir.path().join("assets/pic.png").exists());
        assert!(dir.path().join(".trash/assets/pic.png").exists());
    }

    #[test]
    fn test_trash_collision_gets_suffix() {
        let dir = vault_with(&["pic.png", ".trash/pic.png"]);
        let report = delete_attachments(
            dir.path(),
            &records(&["pic.png"]),
            DeleteMode::Trash,
            &ExclusionRule::default(),
        );

        assert_eq!(report.deleted, vec!["pic.png"]);
        assert!(dir.path().join(".trash/pic.png.1").exists());
    }

    #[test]
    fn test_permanent_removes_file() {
        let dir = vault_with(&["pic.png"]);
        let report = delete_attachments(
            dir.path(),
            &records(&["pic.png"]),
            DeleteMode::Permanent,
            &ExclusionRule::default(),
        );

        assert_eq!(report.deleted, vec!["pic.png"]);
        assert!(!dir.path().join("pic.png").exists());
    }

    #[test]
    fn test_exclusion_rechecked_at_deletion() {
        let dir = vault_with(&["Archive/pic.png"]);
        let rule = ExclusionRule::parse("Archive", true);
        let report = delete_attachments(
            dir.path(),
            &records(&["Archive/pic.png"]),
            DeleteMode::Permanent,
            &rule,
        );

        assert!(report.deleted.is_empty());
        assert_eq!(report.excluded, vec!["Archive/pic.png"]);
        assert!(dir.path().join("Archive/pic.png").exists());
    }

    #[test]
    fn test_missing_file_recorded_as_failure() {
        let dir = vault_with(&[]);
        let report = delete_attachments(
            dir.path(),
            &records(&["gone.png"]),
            DeleteMode::Permanent,
            &ExclusionRule::default(),
        );

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "gone.png");
    }
}
