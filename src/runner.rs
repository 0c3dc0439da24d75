// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The blastp-runner authors

use std::io::{stdout, Write};

use log::info;

use clap::Parser;

use crate::blastp::BlastpCommand;
use crate::errors::RunnerError;
use crate::tool::{AlignmentTool, NcbiBlastp, ToolOutput};


/// Run blastp on the remaining family sequences against all cluster sequences, writing tabular
/// hits to supplementary/cluster_data/remaining_fam_seqs_blastp.tsv. Paths are fixed and blastp
/// must be on PATH.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {}

pub fn confirmation_message(command: &BlastpCommand) -> String {
    format!("Written alignment output to:\n{}", command.out.display())
}

/// Runs `command` once through `tool` and reports to `out`.
///
/// Anything the tool wrote to stderr is echoed first; the confirmation follows regardless. Errors
/// from the tool itself (it could not be launched, or exited unsuccessfully) are returned before
/// anything is printed. The output file is never touched here.
pub fn run_alignment<T, W>(
    tool: &T,
    command: &BlastpCommand,
    out: &mut W,
) -> Result<ToolOutput, RunnerError>
where
    T: AlignmentTool + ?Sized,
    W: Write,
{
    info!("Running: {}", command);
    let output = tool.run(command)?;

    if !output.stderr.is_empty() {
        writeln!(out, "{}", output.stderr)?;
    }
    writeln!(out, "{}", confirmation_message(command))?;
    out.flush()?;

    info!("blastp finished, output at {}", command.out.display());
    Ok(output)
}

pub fn run() -> Result<(), RunnerError> {
    env_logger::init();
    info!("Starting log");

    let _cli = Cli::parse();

    let tool = NcbiBlastp::default();
    let command = BlastpCommand::cluster_default();
    run_alignment(&tool, &command, &mut stdout().lock())?;

    Ok(())
}
