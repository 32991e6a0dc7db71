use std::fs;
use std::path::Path;

use super::size::format_kb;
use crate::core::errors::Result;
use crate::models::DirectoryEntry;

pub const TEXT_HEADER: &str = "File Name | File Size (KB)\n";

pub fn render_text(entries: &[DirectoryEntry]) -> String {
    let mut out = String::from(TEXT_HEADER);
    for entry in entries {
        out.push_str(&entry.name);
        out.push_str(" | ");
        out.push_str(&format_kb(entry.size));
        out.push('\n');
    }
    out
}

/// Overwrites `path`.
pub fn write_text_report(path: &Path, entries: &[DirectoryEntry]) -> Result<()> {
    fs::write(path, render_text(entries))?;
    Ok(())
}
