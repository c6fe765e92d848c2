use std::path::PathBuf;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::core::{DefaultAttributeTranslations, ProductId, ProductState};

#[derive(Debug)]
pub enum CommandSummary {
    Defaults(DefaultsSummary),
    Pending(PendingSummary),
    Translations(TranslationsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct DefaultsSummary {
    pub product: ProductId,
    /// False when the id does not resolve to a product.
    pub found: bool,
    pub translations: DefaultAttributeTranslations,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSummary {
    pub product: ProductId,
    /// `None` when the id does not resolve to a product.
    pub state: Option<ProductState>,
    pub pending: bool,
    pub maybe_variable: bool,
}

#[derive(Debug)]
pub struct TranslationsSummary {
    pub kind: &'static str,
    pub id: u64,
    pub translations: Vec<(String, u64)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running polycat commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub format: OutputFormat,
    /// True when the command ran but its answer is "no" (exit code 1).
    pub failed: bool,
}

