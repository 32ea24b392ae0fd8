//! Format check and list results as text or JSON.

use super::types::{CheckSummary, ListSummary};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn format_size(size: Option<usize>) -> String {
    size.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Format a check result as human-readable text.
pub fn format_check_text(summary: &CheckSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Golden Fixtures")));
    out.push_str(&format!("  Golden dir: {}\n", summary.golden_dir));
    out.push_str(&format!("  Actual files: {}\n", summary.actual_files));
    out.push_str(&format!(
        "  Mode: {}\n\n",
        if summary.updated { "update" } else { "compare" }
    ));

    if summary.entries.is_empty() {
        out.push_str("All fixtures match.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Kind", "Path", "Expected bytes", "Actual bytes"]);
    for entry in &summary.entries {
        table.add_row(vec![
            entry.kind.to_string(),
            entry.path.clone(),
            format_size(entry.expected_bytes),
            format_size(entry.actual_bytes),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));

    if let Some(ref error) = summary.error {
        out.push_str(error);
        out.push('\n');
    } else if summary.updated {
        out.push_str(&format!("Updated {} fixtures.\n", summary.entries.len()));
    }
    out
}

pub fn format_check_json(summary: &CheckSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

/// Format a list result as human-readable text.
pub fn format_list_text(summary: &ListSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Fixtures")));
    if summary.files.is_empty() {
        out.push_str(&format!("No fixtures found in {}.\n", summary.dir));
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Bytes", "Digest"]);
    for file in &summary.files {
        table.add_row(vec![file.path.clone(), file.bytes.to_string(), file.digest.clone()]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} files.\n", summary.files.len()));
    out
}

pub fn format_list_json(summary: &ListSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}
