use std::fs;
use std::path::PathBuf;

use tempfile::{TempDir, tempdir};

use vaultsweep_core::exclude::ExclusionRule;
use vaultsweep_core::scan::{collect_used_paths, compute_unused_attachments};
use vaultsweep_core::vault::{FsVault, ScanMode};

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn build_vault(files: &[(&str, &str)]) -> TempDir {
    let tmp = tempdir().unwrap();
    for (path, content) in files {
        write_file(&tmp.path().join(path), content);
    }
    tmp
}

fn unused_paths(vault: &FsVault, mode: ScanMode, rule: &ExclusionRule) -> Vec<String> {
    compute_unused_attachments(vault, mode, rule)
        .unused
        .into_iter()
        .map(|a| a.path)
        .collect()
}

#[test]
fn end_to_end_example() {
    // a.md references b.png; c.png is unreferenced; Archive/d.png is excluded.
    let tmp = build_vault(&[
        ("a.md", "# A\n\n![[b.png]]\n"),
        ("b.png", "x"),
        ("c.png", "x"),
        ("Archive/d.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();
    let rule = ExclusionRule::parse("Archive", true);

    assert_eq!(unused_paths(&vault, ScanMode::Image, &rule), vec!["c.png"]);
}

#[test]
fn wiki_embed_marks_bare_name_used() {
    let tmp = build_vault(&[
        ("note.md", "![[pic.png]]"),
        ("attachments/pic.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();

    let outcome = collect_used_paths(&vault);
    assert!(outcome.used.contains("attachments/pic.png"));
}

#[test]
fn markdown_and_wiki_links_are_syntax_independent() {
    let tmp = build_vault(&[
        ("one.md", "[x](folder/pic.png)"),
        ("two.md", "[[folder/pic.png]]"),
        ("folder/pic.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();
    let rule = ExclusionRule::default();

    // Referenced through either syntax alone, the file is used.
    assert!(unused_paths(&vault, ScanMode::Image, &rule).is_empty());
}

#[test]
fn frontmatter_banner_marks_attachment_used() {
    let tmp = build_vault(&[
        ("note.md", "---\nbanner: \"![[cover.jpg]]\"\n---\nNo body links.\n"),
        ("cover.jpg", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();

    assert!(unused_paths(&vault, ScanMode::Image, &ExclusionRule::default()).is_empty());
}

#[test]
fn frontmatter_bare_image_path_marks_attachment_used() {
    let tmp = build_vault(&[
        ("note.md", "---\nimage: media/photo.png\n---\n"),
        ("media/photo.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();

    assert!(unused_paths(&vault, ScanMode::Image, &ExclusionRule::default()).is_empty());
}

#[test]
fn canvas_file_and_text_nodes_mark_attachments_used() {
    let canvas = r#"{"nodes": [
        {"id": "1", "type": "file", "file": "diagram.png"},
        {"id": "2", "type": "text", "text": "see [[chart.png]]"}
    ]}"#;
    let tmp = build_vault(&[
        ("board.canvas", canvas),
        ("diagram.png", "x"),
        ("chart.png", "x"),
        ("lonely.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();

    assert_eq!(
        unused_paths(&vault, ScanMode::Image, &ExclusionRule::default()),
        vec!["lonely.png"]
    );
}

#[test]
fn malformed_canvas_warns_and_scan_continues() {
    let tmp = build_vault(&[
        ("broken.canvas", "{not valid json"),
        ("note.md", "![[pic.png]]"),
        ("pic.png", "x"),
        ("orphan.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();

    let report = compute_unused_attachments(&vault, ScanMode::Image, &ExclusionRule::default());
    assert_eq!(report.warnings, 1);
    let paths: Vec<_> = report.unused.iter().map(|a| a.path.as_str()).collect();
    assert_eq!(paths, vec!["orphan.png"]);
}

#[test]
fn used_set_never_contains_documents() {
    let tmp = build_vault(&[
        ("a.md", "[[b]] and [[board]] and ![[pic.png]]"),
        ("b.md", "# B"),
        ("board.canvas", "{\"nodes\": []}"),
        ("pic.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();

    let outcome = collect_used_paths(&vault);
    assert!(!outcome.used.iter().any(|p| p.ends_with(".md") || p.ends_with(".canvas")));
    assert!(outcome.used.contains("pic.png"));
}

#[test]
fn all_mode_includes_non_image_attachments() {
    let tmp = build_vault(&[
        ("note.md", "[[report.pdf]]"),
        ("report.pdf", "x"),
        ("stale.pdf", "x"),
        ("stale.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();
    let rule = ExclusionRule::default();

    // Image mode never reports the pdf; all mode does.
    assert_eq!(unused_paths(&vault, ScanMode::Image, &rule), vec!["stale.png"]);
    assert_eq!(unused_paths(&vault, ScanMode::All, &rule), vec!["stale.pdf", "stale.png"]);
}

#[test]
fn filtered_result_never_intersects_excluded_folders() {
    let tmp = build_vault(&[
        ("Archive/a.png", "x"),
        ("Archive/Old/b.png", "x"),
        ("keep/c.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();
    let rule = ExclusionRule::parse("Archive", true);

    let unused = unused_paths(&vault, ScanMode::Image, &rule);
    assert_eq!(unused, vec!["keep/c.png"]);
}

#[test]
fn prefix_boundary_of_exclusion_is_respected() {
    let tmp = build_vault(&[
        ("Archive/Old/img.png", "x"),
        ("ArchiveNotes/img.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();
    let rule = ExclusionRule::parse("Archive", true);

    assert_eq!(unused_paths(&vault, ScanMode::Image, &rule), vec!["ArchiveNotes/img.png"]);
}

#[test]
fn rescan_of_unchanged_vault_is_idempotent() {
    let tmp = build_vault(&[
        ("a.md", "![[b.png]] plus [x](docs/c.pdf)"),
        ("b.png", "x"),
        ("docs/c.pdf", "x"),
        ("unused1.png", "x"),
        ("unused2.png", "x"),
    ]);
    let vault = FsVault::open(tmp.path()).unwrap();
    let rule = ExclusionRule::default();

    let first = unused_paths(&vault, ScanMode::All, &rule);
    let second = unused_paths(&vault, ScanMode::All, &rule);
    assert_eq!(first, second);
    assert_eq!(first, vec!["unused1.png", "unused2.png"]);
}

#[test]
fn unreadable_document_warns_and_scan_continues() {
    let tmp = build_vault(&[("note.md", "![[pic.png]]"), ("pic.png", "x")]);
    // Invalid UTF-8 makes the read fail without touching permissions.
    fs::write(tmp.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();
    let vault = FsVault::open(tmp.path()).unwrap();

    let report = compute_unused_attachments(&vault, ScanMode::Image, &ExclusionRule::default());
    assert_eq!(report.warnings, 1);
    assert!(report.unused.is_empty());
}
