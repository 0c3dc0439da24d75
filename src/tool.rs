// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The blastp-runner authors

use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use log::{debug, warn};

use crate::blastp::BlastpCommand;
use crate::errors::RunnerError;

/// Whatever the tool printed, decoded lossily.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Something that can carry out a blastp invocation. The real thing spawns NCBI `blastp`; tests
/// substitute a fake.
pub trait AlignmentTool {
    fn run(&self, command: &BlastpCommand) -> Result<ToolOutput, RunnerError>;
}

pub struct NcbiBlastp {
    executable: PathBuf,
}

impl NcbiBlastp {
    pub fn new<P: Into<PathBuf>>(executable: P) -> Self {
        NcbiBlastp {
            executable: executable.into(),
        }
    }
}

// Plain `blastp`, resolved through PATH.
impl Default for NcbiBlastp {
    fn default() -> Self {
        NcbiBlastp::new("blastp")
    }
}

impl AlignmentTool for NcbiBlastp {
    fn run(&self, command: &BlastpCommand) -> Result<ToolOutput, RunnerError> {
        debug!("Spawning {}", self.executable.display());
        // Blocks until blastp exits. No timeout.
        let output = Command::new(&self.executable)
            .args(command.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RunnerError::Launch {
                program: self.executable.display().to_string(),
                source: e,
            })?;
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            warn!("{} exited with {}", self.executable.display(), output.status);
            return Err(RunnerError::Exit {
                program: self.executable.display().to_string(),
                status: output.status,
                stderr,
            });
        }
        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
        })
    }
}
