use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init},
};

/// Dispatch to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` describing what the command did
/// - `Err` if the command fails (e.g., jar not found, invalid config, write error)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
