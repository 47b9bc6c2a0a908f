//! Report formatting and printing utilities.
//!
//! Separate from core logic so the extraction engine can be used as a
//! library without printing anything.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, GenerateOutcome, GenerateSummary, InitSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::diagnostics::{Diagnostic, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Print diagnostics in discovery order. Info lines are only shown when
/// `verbose` is set.
pub fn print_diagnostics<W: Write>(diagnostics: &[Diagnostic], verbose: bool, writer: &mut W) {
    for diagnostic in diagnostics {
        match diagnostic.severity() {
            Severity::Info if verbose => {
                let _ = writeln!(writer, "{}", diagnostic.to_string().dimmed());
            }
            Severity::Info => {}
            Severity::Warning => {
                let _ = writeln!(writer, "{}", diagnostic.to_string().yellow());
            }
        }
    }
}

fn print_generate<W: Write>(summary: &GenerateSummary, verbose: bool, writer: &mut W) {
    if summary.outcome == GenerateOutcome::Cancelled {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("Not overwriting {}", summary.output.display()).red()
        );
        return;
    }

    let extraction = &summary.extraction;
    let _ = writeln!(
        writer,
        "Scanned {} {} in {}",
        extraction.units_scanned,
        if extraction.units_scanned == 1 {
            "class"
        } else {
            "classes"
        },
        summary.archive.display()
    );

    print_diagnostics(&extraction.diagnostics, verbose, writer);

    if summary.outcome == GenerateOutcome::NothingFound {
        let _ = writeln!(
            writer,
            "{}",
            "No localizable string literals found.".yellow()
        );
        return;
    }

    let duplicates = extraction.duplicate_count();
    let _ = writeln!(
        writer,
        "{} {} found{}.",
        extraction.literal_count,
        if extraction.literal_count == 1 {
            "literal"
        } else {
            "literals"
        },
        if duplicates > 0 {
            format!(
                " ({} {} skipped)",
                duplicates,
                if duplicates == 1 {
                    "duplicate"
                } else {
                    "duplicates"
                }
            )
        } else {
            String::new()
        }
    );

    let keys = extraction.entries.len();
    let keys_label = if keys == 1 { "key" } else { "keys" };
    match summary.outcome {
        GenerateOutcome::Written => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote {} {} to {} (version {})",
                    keys,
                    keys_label,
                    summary.output.display(),
                    summary.version
                )
                .green()
            );
        }
        GenerateOutcome::DryRun => {
            let _ = writeln!(
                writer,
                "Dry run: {} {} would be written to {} (version {})",
                keys,
                keys_label,
                summary.output.display(),
                summary.version
            );
        }
        GenerateOutcome::NothingFound | GenerateOutcome::Cancelled => {}
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}

// ============================================================
// Tests
// ============================================================
