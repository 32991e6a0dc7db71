use crate::models::DirectoryEntry;

/// Size every folder is reported with, whatever the server claims.
pub const FOLDER_SIZE: u64 = 1;

/// Bytes to kilobytes, rounded half away from zero to two decimals.
pub fn bytes_to_kb(bytes: u64) -> f64 {
    (bytes as f64 / 10.24).round() / 100.0
}

pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes_to_kb(bytes))
}

pub fn normalize_sizes(entries: &mut [DirectoryEntry]) {
    for entry in entries.iter_mut().filter(|e| e.is_folder()) {
        entry.size = FOLDER_SIZE;
    }
}

/// Largest first. Order among equal sizes is not preserved.
pub fn sort_by_size_desc(entries: &mut [DirectoryEntry]) {
    entries.sort_unstable_by(|a, b| b.size.cmp(&a.size));
}

/// Normalizes folder sizes, then sorts, so folders rank by their reported size.
pub fn prepare_entries(mut entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    normalize_sizes(&mut entries);
    sort_by_size_desc(&mut entries);
    entries
}
