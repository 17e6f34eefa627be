//! Folder exclusion rules for deletion candidates.

use crate::vault::AttachmentRecord;

/// User-configured folder exclusions: a list of folder paths plus whether
/// nested subfolders are covered. Stateless predicate over an attachment's
/// parent folder.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRule {
    folders: Vec<String>,
    include_subfolders: bool,
}

impl ExclusionRule {
    /// Parse the configured comma-separated folder list. Entries are trimmed;
    /// empty entries are dropped.
    pub fn parse(folders: &str, include_subfolders: bool) -> Self {
        let folders = folders
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .collect();

        Self { folders, include_subfolders }
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub fn include_subfolders(&self) -> bool {
        self.include_subfolders
    }

    /// Whether an exclusion entry covers this attachment's parent folder.
    ///
    /// With subfolders included, both sides are normalised to end in `/`
    /// before the prefix test, so `Attach` cannot match `Attachment`.
    /// Files at the vault root are never excluded.
    pub fn is_excluded(&self, record: &AttachmentRecord) -> bool {
        if self.folders.is_empty() {
            return false;
        }

        let Some(parent) = record.parent_folder() else {
            return false;
        };

        if self.include_subfolders {
            let parent = format!("{parent}/");
            self.folders.iter().any(|folder| parent.starts_with(&format!("{folder}/")))
        } else {
            self.folders.iter().any(|folder| folder == parent)
        }
    }
}
