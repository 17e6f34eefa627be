use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::delete::DeleteMode;
use crate::exclude::ExclusionRule;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Comma-separated folder paths kept out of deletion candidates
    /// (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: String,
    /// Whether exclusions also cover nested subfolders.
    #[serde(default = "default_exclude_subfolders")]
    pub exclude_subfolders: bool,
    #[serde(default)]
    pub delete_mode: DeleteMode,
}

fn default_exclude_subfolders() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub exclusion: ExclusionRule,
    pub delete_mode: DeleteMode,
    pub logging: LoggingConfig,
}
