use super::{CommandResult, CommandSummary};
use crate::config::OutputFormat;

pub fn finish(summary: CommandSummary, format: OutputFormat) -> CommandResult {
    let failed = match &summary {
        CommandSummary::Pending(pending) => !pending.pending,
        CommandSummary::Defaults(_)
        | CommandSummary::Translations(_)
        | CommandSummary::Init(_) => false,
    };

    CommandResult {
        summary,
        format,
        failed,
    }
}
