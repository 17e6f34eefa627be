//! Doctor command implementation.

use std::path::Path;

use vaultsweep_core::config::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   vsw doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("delete_mode: {}", rc.delete_mode.as_str());
            if rc.exclusion.is_empty() {
                println!("excluded_folders: (none)");
            } else {
                println!("excluded_folders: {}", rc.exclusion.folders().join(", "));
            }
            println!("exclude_subfolders: {}", rc.exclusion.include_subfolders());
        }
        Err(e) => {
            println!("FAIL vsw doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
