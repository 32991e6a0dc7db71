use std::str::FromStr;

use suppaftp::list::File;

use crate::models::{DirectoryEntry, EntryKind};

/// Parses raw `LIST` output into entries.
///
/// Lines the parser does not understand (e.g. the `total 12` header some
/// servers emit) are skipped, as are the `.` and `..` pseudo-entries.
pub fn parse_list_lines<S: AsRef<str>>(lines: &[S]) -> Vec<DirectoryEntry> {
    let mut entries = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        match File::from_str(line) {
            Ok(file) => {
                if file.name() == "." || file.name() == ".." {
                    continue;
                }
                entries.push(to_entry(&file));
            }
            Err(e) => tracing::warn!("Skipping unparsable listing line {:?}: {}", line, e),
        }
    }
    entries
}

fn to_entry(file: &File) -> DirectoryEntry {
    let kind = if file.is_directory() {
        EntryKind::Folder
    } else if file.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };
    DirectoryEntry::new(file.name(), file.size() as u64, kind)
}
