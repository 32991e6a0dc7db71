pub mod client;
pub mod listing;

use crate::core::errors::Result;
use crate::models::DirectoryEntry;

pub use client::FtpSession;

/// A logged-in (or about to be) remote file session.
///
/// The session driver only talks to the server through this trait so it can be
/// exercised without a network.
pub trait RemoteSession {
    fn login(&mut self, username: &str, password: &str) -> Result<()>;

    /// Fails with `Error::ChangeDir`.
    fn change_dir(&mut self, path: &str) -> Result<()>;

    /// Lists `path`, which is the current working directory after a successful
    /// `change_dir`. Fails with `Error::List`.
    fn list(&mut self, path: &str) -> Result<Vec<DirectoryEntry>>;

    fn quit(&mut self) -> Result<()>;
}
