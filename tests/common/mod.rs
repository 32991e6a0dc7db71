#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::rc::Rc;

use ftpsize::core::errors::{Error, Result};
use ftpsize::models::DirectoryEntry;
use ftpsize::services::ftp::RemoteSession;
use ftpsize::services::session::Console;

pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn console_output(console: TestConsole) -> String {
    let (_, out) = console.into_parts();
    String::from_utf8(out).expect("console output is utf-8")
}

/// In-memory server: a map of directory path to its entries.
#[derive(Default)]
pub struct FakeServer {
    pub dirs: HashMap<String, Vec<DirectoryEntry>>,
    /// Directories that can be entered but not listed.
    pub unlistable: Vec<String>,
    pub reject_login: bool,
    pub reject_quit: bool,
    pub calls: Vec<String>,
}

impl FakeServer {
    pub fn with_dir(mut self, path: &str, entries: Vec<DirectoryEntry>) -> Self {
        self.dirs.insert(path.to_string(), entries);
        self
    }

    pub fn shared(self) -> Rc<RefCell<FakeServer>> {
        Rc::new(RefCell::new(self))
    }
}

pub struct FakeSession {
    pub server: Rc<RefCell<FakeServer>>,
}

impl RemoteSession for FakeSession {
    fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let mut server = self.server.borrow_mut();
        server.calls.push(format!("login {} {}", username, password));
        if server.reject_login {
            return Err(Error::Login("530 Login incorrect.".to_string()));
        }
        Ok(())
    }

    fn change_dir(&mut self, path: &str) -> Result<()> {
        let mut server = self.server.borrow_mut();
        server.calls.push(format!("cwd {}", path));
        if server.dirs.contains_key(path) || server.unlistable.iter().any(|p| p == path) {
            Ok(())
        } else {
            Err(Error::ChangeDir {
                path: path.to_string(),
                reason: "550 No such file or directory".to_string(),
            })
        }
    }

    fn list(&mut self, path: &str) -> Result<Vec<DirectoryEntry>> {
        let mut server = self.server.borrow_mut();
        server.calls.push(format!("list {}", path));
        match server.dirs.get(path) {
            Some(entries) => Ok(entries.clone()),
            None => Err(Error::List {
                path: path.to_string(),
                reason: "550 Permission denied".to_string(),
            }),
        }
    }

    fn quit(&mut self) -> Result<()> {
        let mut server = self.server.borrow_mut();
        server.calls.push("quit".to_string());
        if server.reject_quit {
            return Err(Error::Quit("421 Service not available".to_string()));
        }
        Ok(())
    }
}

/// Raw `<v>` contents of one cell in a worksheet XML part.
pub fn cell_value(sheet: &str, cell: &str) -> Option<String> {
    let start = sheet.find(&format!(r#"<c r="{}""#, cell))?;
    let cell_xml = &sheet[start..];
    let cell_xml = &cell_xml[..cell_xml.find("</c>")?];
    let value_start = cell_xml.find("<v>")? + "<v>".len();
    let value_end = cell_xml.find("</v>")?;
    Some(cell_xml[value_start..value_end].to_string())
}

/// Shared string table entries in index order.
pub fn shared_strings(xml: &str) -> Vec<String> {
    xml.split("<t>")
        .skip(1)
        .filter_map(|chunk| chunk.split("</t>").next())
        .map(str::to_string)
        .collect()
}

/// Text of a shared-string cell.
pub fn string_cell(sheet: &str, strings: &[String], cell: &str) -> Option<String> {
    let index: usize = cell_value(sheet, cell)?.parse().ok()?;
    strings.get(index).cloned()
}
