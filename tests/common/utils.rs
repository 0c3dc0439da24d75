// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The blastp-runner authors

use std::{
    cell::RefCell,
    path::{Path, PathBuf},
};

use blastp_runner::{
    blastp::BlastpCommand,
    errors::RunnerError,
    run_alignment,
    tool::{AlignmentTool, ToolOutput},
};

// Stands in for blastp: remembers every command it was given and replies with canned streams.
// Optionally writes `table` to the command's output path, as the real tool would.
pub struct RecordingTool {
    pub stdout: String,
    pub stderr: String,
    pub table: Option<String>,
    pub commands: RefCell<Vec<BlastpCommand>>,
}

impl RecordingTool {
    pub fn new(stderr: &str) -> Self {
        RecordingTool {
            stdout: String::new(),
            stderr: String::from(stderr),
            table: None,
            commands: RefCell::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn writing(table: &str) -> Self {
        let mut tool = RecordingTool::new("");
        tool.table = Some(String::from(table));
        tool
    }
}

impl AlignmentTool for RecordingTool {
    fn run(&self, command: &BlastpCommand) -> Result<ToolOutput, RunnerError> {
        self.commands.borrow_mut().push(command.clone());
        if let Some(table) = &self.table {
            std::fs::write(&command.out, table)?;
        }
        Ok(ToolOutput {
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
        })
    }
}

pub fn run_captured<T: AlignmentTool>(tool: &T, command: &BlastpCommand) -> String {
    let mut out: Vec<u8> = Vec::new();
    run_alignment(tool, command, &mut out).expect("run");
    String::from_utf8(out).expect("utf-8")
}

#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("blastp-runner-it-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[allow(dead_code)]
pub fn cleanup(dir: &Path) {
    std::fs::remove_dir_all(dir).ok();
}

// A shell script standing in for the real blastp executable.
#[cfg(unix)]
#[allow(dead_code)]
pub fn fake_blastp(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let exe = dir.join("blastp");
    std::fs::write(&exe, format!("#!/bin/sh\n{}", body)).expect("write script");
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).expect("chmod script");
    exe
}

// Retries launches that fail with ETXTBSY, which a freshly written script can hit while another
// test thread forks.
#[allow(dead_code)]
pub fn run_alignment_retrying<T: AlignmentTool>(
    tool: &T,
    command: &BlastpCommand,
    out: &mut Vec<u8>,
) -> Result<ToolOutput, RunnerError> {
    let mut attempts = 0;
    loop {
        let res = run_alignment(tool, command, out);
        let busy = matches!(
            &res,
            Err(RunnerError::Launch { source, .. }) if source.raw_os_error() == Some(26)
        );
        if busy && attempts < 20 {
            attempts += 1;
            std::thread::sleep(std::time::Duration::from_millis(50));
            continue;
        }
        return res;
    }
}
