use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, GenerateOutcome, GenerateSummary};
use crate::{
    cli::{args::GenerateCommand, prompt::confirm_overwrite},
    config::{load_config, validate_marker},
    core::{Extraction, extract_archive, keyfile::write_key_file},
};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let GenerateCommand { jar, version, args } = cmd;

    validate_archive_path(&jar)?;

    let mut config = load_config(&env::current_dir()?)?;
    if let Some(marker) = args.marker {
        validate_marker(&marker)?;
        config.marker = marker;
    }

    let output = args.output.unwrap_or_else(|| PathBuf::from(&config.output));

    let summary = |outcome: GenerateOutcome, extraction: Extraction| -> Result<CommandResult> {
        Ok(CommandResult {
            summary: CommandSummary::Generate(GenerateSummary {
                archive: jar.clone(),
                output: output.clone(),
                version: version.clone(),
                outcome,
                extraction,
            }),
        })
    };

    if !args.dry_run && !args.force && output.exists() && !confirm_overwrite()? {
        return summary(GenerateOutcome::Cancelled, Extraction::default());
    }

    let extraction = extract_archive(&jar, &config.extract_options())?;

    let outcome = if extraction.entries.is_empty() {
        GenerateOutcome::NothingFound
    } else if args.dry_run {
        GenerateOutcome::DryRun
    } else {
        write_key_file(&output, &version, &extraction.entries)?;
        GenerateOutcome::Written
    };

    summary(outcome, extraction)
}

fn validate_archive_path(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let is_jar = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"));
    if !is_jar || !path.is_file() {
        bail!("jar file expected: {}", path.display());
    }

    Ok(())
}
