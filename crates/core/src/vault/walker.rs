//! Recursive vault directory walker.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A file discovered under the vault root.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the vault root, `/`-separated.
    pub relative_path: String,
}

/// Walker for discovering every file in a vault.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
}

impl VaultWalker {
    /// Create a new walker for the given vault root.
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;

        Ok(Self { root })
    }

    /// Walk the vault and return all files, documents and attachments alike.
    /// Hidden entries (including the vault trash) and common non-vault
    /// directories are skipped.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
        {
            let entry = entry
                .map_err(|e| VaultWalkerError::WalkError(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&self.root).unwrap_or(path);

            files.push(WalkedFile {
                absolute_path: path.to_path_buf(),
                relative_path: to_vault_path(relative),
            });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Get the vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Check if an entry should be excluded from walking.
fn is_excluded(entry: &walkdir::DirEntry) -> bool {
    // Never filter the root directory (depth 0)
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();

    // Skip hidden files and directories; this also covers the `.trash` folder.
    if name.starts_with('.') {
        return true;
    }

    // Skip common non-vault directories
    matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv")
}

/// Render a relative path with `/` separators regardless of platform.
fn to_vault_path(relative: &Path) -> String {
    let mut out = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}
