//! Scan command implementation.

use std::path::Path;

use tracing::debug;

use vaultsweep_core::config::ConfigLoader;
use vaultsweep_core::scan::compute_unused_attachments;
use vaultsweep_core::vault::FsVault;

use super::output::{print_attachments_json, print_attachments_quiet, print_attachments_table};
use crate::{OutputFormat, ScanArgs};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: ScanArgs) {
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

    debug!(vault = %rc.vault_root.display(), "scanning for unused attachments");

    let report = compute_unused_attachments(&vault, args.mode.into(), &rc.exclusion);

    if report.warnings > 0 {
        eprintln!(
            "warning: {} document(s) could not be fully scanned; results may be incomplete",
            report.warnings
        );
    }

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_attachments_table(&report.unused),
        OutputFormat::Json => print_attachments_json(&report.unused),
        OutputFormat::Quiet => print_attachments_quiet(&report.unused),
    }
}

fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}
