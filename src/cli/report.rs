//! Report formatting and printing utilities.
//!
//! Separate from core logic so polycat can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::{Map, Value, json};

use super::commands::{
    CommandResult, CommandSummary, DefaultsSummary, InitSummary, PendingSummary,
    TranslationsSummary,
};
use crate::config::OutputFormat;
use crate::core::ProductState;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Defaults(summary) => print_defaults(summary, result.format, writer),
        CommandSummary::Pending(summary) => print_pending(summary, result.format, writer),
        CommandSummary::Translations(summary) => {
            print_translations(summary, result.format, writer)
        }
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_json<W: Write, T: serde::Serialize>(value: &T, writer: &mut W) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(e) => {
            let _ = writeln!(writer, "{} failed to render JSON: {}", "error:".bold().red(), e);
        }
    }
}

fn print_defaults<W: Write>(summary: &DefaultsSummary, format: OutputFormat, writer: &mut W) {
    if format == OutputFormat::Json {
        print_json(&summary.translations, writer);
        return;
    }

    if !summary.found {
        let _ = writeln!(
            writer,
            "{} product {} not found",
            "note:".bold().cyan(),
            summary.product
        );
        return;
    }

    if summary.translations.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Product {} has no default attributes to translate",
                summary.product
            )
            .green()
        );
        return;
    }

    let _ = writeln!(writer, "Default attributes of product {}:", summary.product);
    for (language, attributes) in summary.translations.iter() {
        let _ = writeln!(writer, "  {}: {}", language.bold(), attributes);
    }
}

fn print_pending<W: Write>(summary: &PendingSummary, format: OutputFormat, writer: &mut W) {
    if format == OutputFormat::Json {
        print_json(summary, writer);
        return;
    }

    let Some(state) = summary.state else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("Product {} not found", summary.product).red()
        );
        return;
    };

    let message = format!("Product {} is {}", summary.product, state);
    if state == ProductState::SimplePendingVariable {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
    } else {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.yellow(), message.yellow());
    }
}

fn print_translations<W: Write>(
    summary: &TranslationsSummary,
    format: OutputFormat,
    writer: &mut W,
) {
    if format == OutputFormat::Json {
        let map: Map<String, Value> = summary
            .translations
            .iter()
            .map(|(language, id)| (language.clone(), json!(id)))
            .collect();
        print_json(&map, writer);
        return;
    }

    if summary.translations.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} {} has no translations",
            "note:".bold().cyan(),
            summary.kind,
            summary.id
        );
        return;
    }

    let _ = writeln!(writer, "Translations of {} {}:", summary.kind, summary.id);
    for (language, id) in &summary.translations {
        let _ = writeln!(writer, "  {}: {}", language.bold(), id);
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
