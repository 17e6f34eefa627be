use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn write_config(dir: &Path, vault: &Path, excluded: &str) -> PathBuf {
    let cfg_path = dir.join("config.toml");
    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "{vault}"
excluded_folders = "{excluded}"
exclude_subfolders = true
"#,
        vault = vault.display(),
        excluded = excluded,
    );
    fs::write(&cfg_path, toml).unwrap();
    cfg_path
}

#[test]
fn scan_lists_only_unreferenced_images() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");

    write_file(&vault.join("a.md"), "# A\n\n![[b.png]]\n");
    write_file(&vault.join("b.png"), "x");
    write_file(&vault.join("c.png"), "x");
    write_file(&vault.join("Archive/d.png"), "x");

    let cfg = write_config(tmp.path(), &vault, "Archive");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vsw"));
    cmd.args(["--config", cfg.to_str().unwrap(), "scan", "--quiet"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("c.png\n"));
}

#[test]
fn scan_all_mode_includes_other_attachments() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");

    write_file(&vault.join("note.md"), "nothing linked");
    write_file(&vault.join("paper.pdf"), "x");

    let cfg = write_config(tmp.path(), &vault, "");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vsw"));
    cmd.args(["--config", cfg.to_str().unwrap(), "scan", "--mode", "all", "--quiet"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("paper.pdf\n"));
}

#[test]
fn scan_json_output() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");

    write_file(&vault.join("note.md"), "no links");
    write_file(&vault.join("media/pic.png"), "x");

    let cfg = write_config(tmp.path(), &vault, "");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vsw"));
    cmd.args(["--config", cfg.to_str().unwrap(), "scan", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"path\": \"media/pic.png\""))
        .stdout(predicate::str::contains("\"folder\": \"media\""));
}

#[test]
fn scan_reports_nothing_when_everything_is_used() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");

    write_file(&vault.join("note.md"), "![[pic.png]]");
    write_file(&vault.join("pic.png"), "x");

    let cfg = write_config(tmp.path(), &vault, "");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vsw"));
    cmd.args(["--config", cfg.to_str().unwrap(), "scan"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(no unused attachments)"));
}
