/// One item of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub size: u64,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
    Other,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, size: u64, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            size,
            kind,
        }
    }

    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, size, EntryKind::File)
    }

    pub fn folder(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, size, EntryKind::Folder)
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}
