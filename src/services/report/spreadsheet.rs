use std::path::Path;

use rust_xlsxwriter::Workbook;

use super::size::bytes_to_kb;
use crate::core::errors::Result;
use crate::models::DirectoryEntry;

pub const NAME_HEADER: &str = "Filename";
pub const SIZE_HEADER: &str = "File Size (KB)";

/// Writes a single sheet: headers in row 1, one entry per row below, sizes
/// stored as numbers. Overwrites `path`.
pub fn write_spreadsheet(path: &Path, entries: &[DirectoryEntry]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, NAME_HEADER)?;
    sheet.write_string(0, 1, SIZE_HEADER)?;
    for (row, entry) in (1u32..).zip(entries) {
        sheet.write_string(row, 0, &entry.name)?;
        sheet.write_number(row, 1, bytes_to_kb(entry.size))?;
    }

    workbook.save(path)?;
    Ok(())
}
