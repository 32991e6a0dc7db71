use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not connect to {address}: {reason}")]
    Connect { address: String, reason: String },
    #[error("login failed: {0}")]
    Login(String),
    #[error("could not change directory to {path}: {reason}")]
    ChangeDir { path: String, reason: String },
    #[error("could not list {path}: {reason}")]
    List { path: String, reason: String },
    #[error("could not close the ftp session: {0}")]
    Quit(String),
    #[error("could not save spreadsheet: {0}")]
    Spreadsheet(String),
    #[error("standard input closed")]
    InputClosed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Failures the session driver answers with a new path prompt.
    pub fn is_listing_failure(&self) -> bool {
        matches!(self, Error::ChangeDir { .. } | Error::List { .. })
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Spreadsheet(err.to_string())
    }
}
