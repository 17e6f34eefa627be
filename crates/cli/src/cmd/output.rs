//! Shared output formatting for scan results.

use serde::Serialize;
use vaultsweep_core::vault::AttachmentRecord;

/// Formatted attachment for JSON output.
#[derive(Debug, Serialize)]
pub struct AttachmentOutput {
    pub path: String,
    pub extension: String,
    pub folder: String,
}

impl From<&AttachmentRecord> for AttachmentOutput {
    fn from(record: &AttachmentRecord) -> Self {
        Self {
            path: record.path.clone(),
            extension: record.extension.clone(),
            folder: record.parent_folder().unwrap_or("").to_string(),
        }
    }
}

/// Print attachments as a table.
pub fn print_attachments_table(records: &[AttachmentRecord]) {
    if records.is_empty() {
        println!("(no unused attachments)");
        return;
    }

    let path_width =
        records.iter().map(|r| r.path.len()).max().unwrap_or(4).clamp(4, 60);

    // Header
    println!("{:<path_width$}  EXT", "PATH", path_width = path_width);
    println!("{:-<path_width$}  {:-<5}", "", "", path_width = path_width);

    for record in records {
        let path = truncate(&record.path, path_width);
        println!("{:<path_width$}  {}", path, record.extension, path_width = path_width);
    }

    println!();
    println!("-- {} unused attachment(s) --", records.len());
}

/// Print attachments as JSON.
pub fn print_attachments_json(records: &[AttachmentRecord]) {
    let output: Vec<AttachmentOutput> = records.iter().map(AttachmentOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Print attachments as paths only (quiet mode).
pub fn print_attachments_quiet(records: &[AttachmentRecord]) {
    for record in records {
        println!("{}", record.path);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
