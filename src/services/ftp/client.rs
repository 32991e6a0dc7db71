use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use suppaftp::FtpStream;

use super::listing::parse_list_lines;
use super::RemoteSession;
use crate::core::errors::{Error, Result};
use crate::models::DirectoryEntry;

/// Plain FTP session. Sends `QUIT` on drop unless [`RemoteSession::quit`]
/// already did.
pub struct FtpSession {
    stream: Option<FtpStream>,
}

impl FtpSession {
    /// Tries every address `address` resolves to, in order, and keeps the
    /// first that answers.
    pub fn connect(address: &str, timeout: Duration) -> Result<Self> {
        let sockets = resolve(address)?;
        Self::connect_any(address, &sockets, timeout)
    }

    fn connect_any(address: &str, sockets: &[SocketAddr], timeout: Duration) -> Result<Self> {
        let mut last_err = None;
        for socket in sockets {
            tracing::info!("Connecting to {} ({}) with a {:?} timeout", address, socket, timeout);
            match FtpStream::connect_timeout(*socket, timeout) {
                Ok(stream) => {
                    if let Some(welcome) = stream.get_welcome_msg() {
                        tracing::debug!("Server welcome: {}", welcome);
                    }
                    return Ok(Self {
                        stream: Some(stream),
                    });
                }
                Err(e) => {
                    tracing::warn!("Connecting to {} failed: {}", socket, e);
                    last_err = Some(e.to_string());
                }
            }
        }

        Err(Error::Connect {
            address: address.to_string(),
            reason: last_err.unwrap_or_else(|| "address did not resolve".to_string()),
        })
    }

    fn stream(&mut self) -> Result<&mut FtpStream> {
        self.stream
            .as_mut()
            .ok_or_else(|| Error::Quit("session already closed".to_string()))
    }
}

fn resolve(address: &str) -> Result<Vec<SocketAddr>> {
    let connect_err = |reason: String| Error::Connect {
        address: address.to_string(),
        reason,
    };
    let sockets: Vec<_> = address
        .to_socket_addrs()
        .map_err(|e| connect_err(e.to_string()))?
        .collect();
    if sockets.is_empty() {
        return Err(connect_err("address did not resolve".to_string()));
    }
    Ok(sockets)
}

impl RemoteSession for FtpSession {
    fn login(&mut self, username: &str, password: &str) -> Result<()> {
        self.stream()?
            .login(username, password)
            .map_err(|e| Error::Login(e.to_string()))?;
        tracing::info!("Logged in as {}", username);
        Ok(())
    }

    fn change_dir(&mut self, path: &str) -> Result<()> {
        self.stream()?.cwd(path).map_err(|e| Error::ChangeDir {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn list(&mut self, path: &str) -> Result<Vec<DirectoryEntry>> {
        // The working directory is already `path`; listing it again by name
        // would resolve relative paths twice.
        let lines = self.stream()?.list(None).map_err(|e| Error::List {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!("LIST {} returned {} lines", path, lines.len());
        Ok(parse_list_lines(&lines))
    }

    fn quit(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            stream.quit().map_err(|e| Error::Quit(e.to_string()))?;
            tracing::info!("Ftp session closed");
        }
        Ok(())
    }
}

impl Drop for FtpSession {
    fn drop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.quit() {
                tracing::debug!("QUIT on drop failed: {}", e);
            }
        }
    }
}
