use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use super::console::{Console, SEPARATOR};
use crate::core::errors::Result;
use crate::models::DirectoryEntry;
use crate::services::ftp::RemoteSession;
use crate::services::report::size::prepare_entries;
use crate::services::report::spreadsheet::write_spreadsheet;
use crate::services::report::text::write_text_report;
use crate::services::report::ReportPaths;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const ADDRESS_PROMPT: &str =
    "Enter full address, including port, of ftp server. Ex: ftp.example.org:21";
const USERNAME_PROMPT: &str = "Enter username:";
const PASSWORD_PROMPT: &str = "Enter password:";
const PATH_PROMPT: &str =
    "Enter full filepath to run program in. ex: /folder1/folder2/folder3 OR ~/folder2/folder";
const TRY_AGAIN: &str = "Try again with a new directory...";

/// Values known before the session starts. Anything left `None` is prompted for.
#[derive(Debug, Clone, Default)]
pub struct SessionInputs {
    pub address: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub inputs: SessionInputs,
    pub output_dir: PathBuf,
    pub connect_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inputs: SessionInputs::default(),
            output_dir: PathBuf::from("."),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

/// Runs one interactive session: collect connection details, connect, log in,
/// list a directory (re-prompting until a non-empty listing), write both
/// reports and quit.
///
/// Every error returned is fatal; recoverable listing failures never leave
/// this function.
pub fn run_session<R, W, S, C>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
    connect: C,
) -> Result<ReportPaths>
where
    R: BufRead,
    W: Write,
    S: RemoteSession,
    C: FnOnce(&str, Duration) -> Result<S>,
{
    console.say(SEPARATOR)?;
    console.say("Start of FTP App to get files and sizes")?;
    console.say(SEPARATOR)?;

    let address = known_or_prompt(console, config.inputs.address.clone(), ADDRESS_PROMPT)?;
    console.say(&format!("Connecting to address via ftp: {}", address))?;
    let mut session = connect(&address, config.connect_timeout)?;

    let username = known_or_prompt(console, config.inputs.username.clone(), USERNAME_PROMPT)?;
    let password = known_or_prompt(console, config.inputs.password.clone(), PASSWORD_PROMPT)?;
    console.say(&format!(
        "Logging in with user [{}] and password [{}]",
        username, password
    ))?;
    session.login(&username, &password)?;

    let entries = fetch_listing(console, &mut session, config.inputs.path.clone())?;
    let entries = prepare_entries(entries);

    let paths = ReportPaths::in_dir(&config.output_dir);
    write_text_report(&paths.text, &entries)?;
    console.say(&format!("Generated file {}", paths.text.display()))?;
    write_spreadsheet(&paths.spreadsheet, &entries)?;
    console.say(&format!("Generated file {}", paths.spreadsheet.display()))?;
    tracing::info!(
        "Wrote {} entries to {:?} and {:?}",
        entries.len(),
        paths.text,
        paths.spreadsheet
    );

    session.quit()?;
    Ok(paths)
}

fn known_or_prompt<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    known: Option<String>,
    question: &str,
) -> Result<String> {
    match known {
        Some(value) => Ok(value),
        None => console.prompt(question),
    }
}

/// Changes into the path and lists it, asking for another path after every
/// failure or empty listing. There is no retry limit.
pub fn fetch_listing<R, W, S>(
    console: &mut Console<R, W>,
    session: &mut S,
    initial_path: Option<String>,
) -> Result<Vec<DirectoryEntry>>
where
    R: BufRead,
    W: Write,
    S: RemoteSession,
{
    let mut path = initial_path.unwrap_or_default();
    loop {
        if path.is_empty() {
            path = console.prompt(PATH_PROMPT)?;
        }

        let listed = session
            .change_dir(&path)
            .and_then(|()| session.list(&path));
        match listed {
            Ok(entries) => {
                console.say(&format!("Reading files found in {}", path))?;
                console.say(&format!("Files found: {}", entries.len()))?;
                if !entries.is_empty() {
                    return Ok(entries);
                }
                console.say("No files found in directory... Try again with a new directory...")?;
            }
            Err(err) if err.is_listing_failure() => {
                tracing::debug!("Listing {:?} failed: {}", path, err);
                console.say(&err.to_string())?;
                console.say(TRY_AGAIN)?;
            }
            Err(err) => return Err(err),
        }
        path.clear();
    }
}

/// Closes a successful run.
pub fn finish<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say(SEPARATOR)?;
    console.wait_for_enter()
}

/// The one terminal path for fatal errors: frame the message, wait for Enter.
/// The caller exits with a failure status afterwards.
pub fn show_fatal_error<R: BufRead, W: Write>(console: &mut Console<R, W>, message: &str) {
    let shown = console
        .say(SEPARATOR)
        .and_then(|()| console.say("Error"))
        .and_then(|()| console.say(message))
        .and_then(|()| console.say(SEPARATOR))
        .and_then(|()| console.wait_for_enter());
    if let Err(e) = shown {
        tracing::debug!("Could not show the fatal error on the console: {}", e);
    }
}
