use anyhow::Result;

use super::super::{
    args::{TranslationKind, TranslationsCommand},
    context::CommandContext,
};
use super::{CommandResult, CommandSummary, TranslationsSummary, helper::finish};
use crate::core::{
    ProductId, TermId,
    translations::{product_translations, term_translations},
};

pub fn translations(cmd: TranslationsCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let catalog = &ctx.catalog;
    let exclude_default = ctx.exclude_default(cmd.exclude_default);

    let (kind, translations): (&'static str, Vec<(String, u64)>) = match cmd.kind {
        TranslationKind::Product => (
            "product",
            product_translations(catalog, catalog, ProductId(cmd.id), exclude_default)
                .into_iter()
                .map(|(lang, id)| (lang, id.0))
                .collect(),
        ),
        TranslationKind::Term => (
            "term",
            term_translations(catalog, catalog, TermId(cmd.id), exclude_default)
                .into_iter()
                .map(|(lang, id)| (lang, id.0))
                .collect(),
        ),
    };

    let summary = TranslationsSummary {
        kind,
        id: cmd.id,
        translations,
    };

    Ok(finish(CommandSummary::Translations(summary), ctx.format))
}
