use std::env;
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;
use thiserror::Error;

pub const PRINT_CMD_ENV: &str = "KONTRAKT_PRINT_CMD";
pub const DEFAULT_SPOOLER: &str = "lpr";

#[derive(Debug, Error)]
pub enum SpoolError {
    #[error("unable to run print spooler `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("failed handing the document to `{command}`: {source}")]
    Write {
        command: String,
        source: std::io::Error,
    },
    #[error("print spooler `{command}` exited with {status}")]
    Rejected { command: String, status: ExitStatus },
}

// The platform print facility, injected so the app can be driven without a
// real spooler.
pub trait PrintSpooler {
    fn spool(&self, document: &str) -> Result<(), SpoolError>;
}

pub struct SystemSpooler {
    pub command: String,
}

impl SystemSpooler {
    pub fn from_env() -> SystemSpooler {
        let command =
            env::var(PRINT_CMD_ENV).unwrap_or_else(|_| String::from(DEFAULT_SPOOLER));
        SystemSpooler { command }
    }
}

impl PrintSpooler for SystemSpooler {
    fn spool(&self, document: &str) -> Result<(), SpoolError> {
        let mut child = Command::new(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpoolError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(document.as_bytes())
                .map_err(|source| SpoolError::Write {
                    command: self.command.clone(),
                    source,
                })?;
        }

        // spooler commands exit as soon as the job is queued; waiting here
        // only reaps the child and surfaces a refused job
        let status = child.wait().map_err(|source| SpoolError::Spawn {
            command: self.command.clone(),
            source,
        })?;
        if !status.success() {
            return Err(SpoolError::Rejected {
                command: self.command.clone(),
                status,
            });
        }

        debug!("spooled {} bytes to `{}`", document.len(), self.command);
        Ok(())
    }
}
