// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The blastp-runner authors

use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use itertools::Itertools;

use crate::errors::RunnerError;

pub const QUERY_FASTA: &str = "data/cluster_data/remaining_fam_seqs.fasta";
pub const SUBJECT_FASTA: &str = "data/cluster_data/all_clusters.fasta";
pub const OUTPUT_TSV: &str = "supplementary/cluster_data/remaining_fam_seqs_blastp.tsv";

/// BLAST's tabular output: tab-separated, no header (`-outfmt 6`).
pub const TABULAR: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputField {
    QuerySeqId,
    SubjectSeqId,
    PercentIdentity,
    QueryCoverage,
    QueryLength,
    SubjectLength,
    AlignmentLength,
    BitScore,
    EValue,
}

impl OutputField {
    pub fn keyword(&self) -> &'static str {
        match self {
            OutputField::QuerySeqId => "qseqid",
            OutputField::SubjectSeqId => "sseqid",
            OutputField::PercentIdentity => "pident",
            OutputField::QueryCoverage => "qcovs",
            OutputField::QueryLength => "qlen",
            OutputField::SubjectLength => "slen",
            OutputField::AlignmentLength => "length",
            OutputField::BitScore => "bitscore",
            OutputField::EValue => "evalue",
        }
    }
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for OutputField {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "qseqid" => OutputField::QuerySeqId,
            "sseqid" => OutputField::SubjectSeqId,
            "pident" => OutputField::PercentIdentity,
            "qcovs" => OutputField::QueryCoverage,
            "qlen" => OutputField::QueryLength,
            "slen" => OutputField::SubjectLength,
            "length" => OutputField::AlignmentLength,
            "bitscore" => OutputField::BitScore,
            "evalue" => OutputField::EValue,
            other => {
                return Err(RunnerError::Format(format!(
                    "Unknown output field '{}'",
                    other
                )))
            }
        };
        Ok(field)
    }
}

// The -outfmt directive: a numeric format code followed by the column keywords, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFormat {
    pub code: u8,
    pub fields: Vec<OutputField>,
}

impl OutputFormat {
    pub fn new(code: u8, fields: Vec<OutputField>) -> Self {
        OutputFormat { code, fields }
    }

    /// Tabular query/subject identities, coverage, lengths, bit score and e-value.
    pub fn cluster_table() -> Self {
        OutputFormat::new(
            TABULAR,
            vec![
                OutputField::QuerySeqId,
                OutputField::SubjectSeqId,
                OutputField::PercentIdentity,
                OutputField::QueryCoverage,
                OutputField::QueryLength,
                OutputField::SubjectLength,
                OutputField::AlignmentLength,
                OutputField::BitScore,
                OutputField::EValue,
            ],
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.fields.iter().join(" "))
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let code = tokens
            .next()
            .ok_or_else(|| RunnerError::Format(String::from("Empty output format")))?;
        let code: u8 = code
            .parse()
            .map_err(|_| RunnerError::Format(format!("Bad output format code '{}'", code)))?;
        let fields = tokens
            .map(OutputField::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OutputFormat { code, fields })
    }
}

/// One fully specified blastp invocation. Building it has no side effects; running it is up to an
/// `AlignmentTool`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlastpCommand {
    pub query: PathBuf,
    pub subject: PathBuf,
    pub out: PathBuf,
    pub outfmt: OutputFormat,
}

impl BlastpCommand {
    pub fn new<P, Q, R>(query: P, subject: Q, out: R, outfmt: OutputFormat) -> Self
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        BlastpCommand {
            query: query.as_ref().to_path_buf(),
            subject: subject.as_ref().to_path_buf(),
            out: out.as_ref().to_path_buf(),
            outfmt,
        }
    }

    /// Remaining family sequences vs. all cluster sequences.
    pub fn cluster_default() -> Self {
        BlastpCommand::new(
            QUERY_FASTA,
            SUBJECT_FASTA,
            OUTPUT_TSV,
            OutputFormat::cluster_table(),
        )
    }

    // The format directive goes in as a single argument, spaces and all.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-query"),
            self.query.clone().into_os_string(),
            OsString::from("-subject"),
            self.subject.clone().into_os_string(),
            OsString::from("-out"),
            self.out.clone().into_os_string(),
            OsString::from("-outfmt"),
            OsString::from(self.outfmt.to_string()),
        ]
    }
}

impl fmt::Display for BlastpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "blastp -query {} -subject {} -out {} -outfmt \"{}\"",
            self.query.display(),
            self.subject.display(),
            self.out.display(),
            self.outfmt
        )
    }
}
