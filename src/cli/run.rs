use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{defaults::defaults, init::init, pending::pending, translations::translations},
};
use anyhow::Result;

/// Main entry point for the polycat CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary and exit behavior
/// - `Err` if the command fails (e.g., invalid config, unreadable catalog)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Defaults(cmd)) => defaults(cmd),
        Some(Command::Pending(cmd)) => pending(cmd),
        Some(Command::Translations(cmd)) => translations(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
