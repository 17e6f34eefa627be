//! Shorthand link target resolution against the vault-wide namespace.

use std::collections::{HashMap, HashSet};

/// Maps raw link tokens to concrete vault paths.
///
/// Built once per scan from the complete file listing (documents included, so
/// a `[[note]]` link resolves to the note instead of a same-named attachment).
#[derive(Debug)]
pub struct LinkResolver {
    /// Exact vault paths for the fast path.
    paths: HashSet<String>,
    /// Lowercased file name, with and without extension, to candidate paths
    /// in sorted order.
    by_name: HashMap<String, Vec<String>>,
}

impl LinkResolver {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut paths = HashSet::new();
        let mut by_name: HashMap<String, Vec<String>> = HashMap::new();

        for file in files {
            let path = file.into();
            let name = file_name(&path).to_ascii_lowercase();

            by_name.entry(name.clone()).or_default().push(path.clone());
            if let Some((stem, _)) = name.rsplit_once('.') {
                if !stem.is_empty() {
                    by_name.entry(stem.to_string()).or_default().push(path.clone());
                }
            }

            paths.insert(path);
        }

        // Sorted candidate lists make the tie-break independent of insertion order.
        for candidates in by_name.values_mut() {
            candidates.sort();
            candidates.dedup();
        }

        Self { paths, by_name }
    }

    /// Map a raw token to a vault path, or `None` when nothing matches.
    ///
    /// An exact vault path wins outright. Otherwise the token's last segment
    /// is treated as a bare filename, matched extension-insensitively against
    /// every file name in the vault. Ambiguity is broken deterministically: a
    /// candidate in the referencing document's folder first, then the
    /// shortest path, then lexicographic order.
    pub fn resolve(&self, token: &str, source_path: &str) -> Option<String> {
        let token = token.trim();
        let token = token.strip_prefix("./").unwrap_or(token);
        if token.is_empty() {
            return None;
        }

        if self.paths.contains(token) {
            return Some(token.to_string());
        }

        let name = file_name(token).to_ascii_lowercase();
        let candidates = self.by_name.get(&name)?;

        if let Some(folder) = parent_folder(source_path) {
            if let Some(local) = candidates.iter().find(|c| parent_folder(c) == Some(folder)) {
                return Some(local.clone());
            }
        }

        candidates.iter().min_by_key(|c| (c.len(), c.as_str())).cloned()
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn parent_folder(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}
