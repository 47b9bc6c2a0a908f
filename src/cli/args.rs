//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Extract localizable literals from a jar into a key file
//! - `init`: Initialize jarloc configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Output key file (overrides config file, default: lang.keys.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Descriptor of the localization marker annotation (overrides config file)
    #[arg(long, value_name = "DESCRIPTOR")]
    pub marker: Option<String>,

    /// Overwrite an existing key file without asking
    #[arg(short, long)]
    pub force: bool,

    /// Report what would be written without writing the key file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Jar file to scan for localizable fields and annotations
    pub jar: PathBuf,

    /// Version written to the key file header
    pub version: String,

    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a language key file from a jar
    Generate(GenerateCommand),
    /// Initialize a new .jarlocrc.json configuration file
    Init,
}
