//! Clean command implementation.

use std::path::Path;

use chrono::Local;
use tracing::info;

use vaultsweep_core::config::ConfigLoader;
use vaultsweep_core::delete::{DeleteMode, delete_attachments};
use vaultsweep_core::scan::compute_unused_attachments;
use vaultsweep_core::vault::FsVault;

use crate::CleanArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: CleanArgs) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    crate::logging::init(&rc);

    let vault = match FsVault::open(&rc.vault_root) {
        Ok(vault) => vault,
        Err(e) => {
            eprintln!("Error opening vault: {}", e);
            std::process::exit(1);
        }
    };

    let report = compute_unused_attachments(&vault, args.mode.into(), &rc.exclusion);

    if report.warnings > 0 {
        eprintln!(
            "warning: {} document(s) could not be fully scanned; unreferenced files may be missing from this run",
            report.warnings
        );
    }

    if report.unused.is_empty() {
        println!("All attachments are used or in excluded folders. Nothing was deleted.");
        return;
    }

    if args.dry_run {
        println!("Would delete {} file(s):", report.unused.len());
        for attachment in &report.unused {
            println!("  {}", attachment.path);
        }
        return;
    }

    let mode = if args.permanent { DeleteMode::Permanent } else { rc.delete_mode };
    info!(mode = mode.as_str(), count = report.unused.len(), "deleting unused attachments");

    // Exclusion is re-checked inside the deletion batch: the vault may have
    // changed between listing and deletion.
    let outcome = delete_attachments(vault.root(), &report.unused, mode, &rc.exclusion);

    println!("vsw clean - {}", Local::now().format("%d/%m/%Y %H:%M:%S"));
    for path in &outcome.deleted {
        match mode {
            DeleteMode::Trash => println!("[+] Moved to vault trash: {}", path),
            DeleteMode::Permanent => println!("[+] Deleted permanently: {}", path),
        }
    }
    for path in &outcome.excluded {
        println!("[-] Excluded, kept: {}", path);
    }
    for (path, err) in &outcome.failed {
        println!("[!] Failed to delete {}: {}", path, err);
    }

    println!();
    println!("-- {} file(s) deleted --", outcome.deleted.len());

    if !outcome.failed.is_empty() {
        std::process::exit(1);
    }
}
