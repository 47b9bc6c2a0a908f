use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::Extraction;

/// How a `generate` run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The key file was written.
    Written,
    /// `--dry-run`: entries were found but nothing was written.
    DryRun,
    /// No literals were found; no file was created or overwritten.
    NothingFound,
    /// The user declined to overwrite the existing key file.
    Cancelled,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub archive: PathBuf,
    pub output: PathBuf,
    pub version: String,
    pub outcome: GenerateOutcome,
    pub extraction: Extraction,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

/// Result of running jarloc commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
            CommandSummary::Init(_) | CommandSummary::Generate(_) => ExitStatus::Success,
        }
    }
}
