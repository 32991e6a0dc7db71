pub mod size;
pub mod spreadsheet;
pub mod text;

use std::path::{Path, PathBuf};

pub const TEXT_REPORT_NAME: &str = "output.txt";
pub const SPREADSHEET_REPORT_NAME: &str = "output.xlsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub spreadsheet: PathBuf,
}

impl ReportPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            text: dir.join(TEXT_REPORT_NAME),
            spreadsheet: dir.join(SPREADSHEET_REPORT_NAME),
        }
    }
}
