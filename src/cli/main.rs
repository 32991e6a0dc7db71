use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ftpsize::core::telemetry::logging::init_logging;
use ftpsize::services::ftp::FtpSession;
use ftpsize::services::session::{
    finish, run_session, show_fatal_error, Console, SessionConfig, SessionInputs,
};

/// Lists a directory on an FTP server and writes its entries, largest first,
/// to output.txt and output.xlsx. Missing values are asked for interactively.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Server address including the port, e.g. ftp.example.org:21
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    password: Option<String>,
    /// Remote directory to list
    #[arg(long)]
    path: Option<String>,
    /// Where output.txt and output.xlsx are written
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Connection timeout in seconds
    #[arg(long, default_value_t = 5)]
    connect_timeout: u64,
}

impl Args {
    fn into_config(self) -> SessionConfig {
        SessionConfig {
            inputs: SessionInputs {
                address: self.address,
                username: self.username,
                password: self.password,
                path: self.path,
            },
            output_dir: self.output_dir,
            connect_timeout: Duration::from_secs(self.connect_timeout),
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let config = Args::parse().into_config();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let outcome = fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output directory {:?}", config.output_dir))
        .and_then(|()| {
            run_session(&mut console, &config, FtpSession::connect).map_err(anyhow::Error::from)
        });

    match outcome {
        Ok(paths) => {
            tracing::info!("Reports written to {:?} and {:?}", paths.text, paths.spreadsheet);
            if let Err(e) = finish(&mut console) {
                tracing::warn!("Could not wait for acknowledgment: {}", e);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            show_fatal_error(&mut console, &format!("{:#}", err));
            tracing::error!("{:?}", err);
            ExitCode::FAILURE
        }
    }
}
