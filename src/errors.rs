// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The blastp-runner authors

use std::{error, fmt, io, process::ExitStatus};

#[derive(Debug)]
pub enum RunnerError {
    Io(io::Error),
    /// The external program could not be started at all (not found, not executable, ...).
    Launch { program: String, source: io::Error },
    /// The external program ran but did not exit successfully.
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    Format(String),
}

// These allow conversion to RunnerError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for RunnerError {
    fn from(e: io::Error) -> Self {
        RunnerError::Io(e)
    }
}

impl From<String> for RunnerError {
    fn from(s: String) -> Self {
        RunnerError::Format(s)
    }
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::Io(e) => write!(f, "I/O error: {}", e),
            RunnerError::Launch { program, source } => {
                write!(f, "Failed to run {}: {}", program, source)
            }
            RunnerError::Exit {
                program,
                status,
                stderr,
            } => {
                write!(f, "{} failed ({})", program, status)?;
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            RunnerError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RunnerError::Io(e) => Some(e),
            RunnerError::Launch { source, .. } => Some(source),
            RunnerError::Exit { .. } | RunnerError::Format(_) => None,
        }
    }
}
