use anyhow::Result;

use super::super::{args::DefaultsCommand, context::CommandContext};
use super::{CommandResult, CommandSummary, DefaultsSummary, helper::finish};
use crate::core::{AttributeTranslationResolver, LanguageRegistry, ProductId, ProductRepository};

pub fn defaults(cmd: DefaultsCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let catalog = &ctx.catalog;
    let product = ProductId(cmd.product);

    let resolver = AttributeTranslationResolver::new(catalog, catalog, catalog);
    let mut translations = resolver.resolve(product, cmd.lang.as_deref());

    if ctx.exclude_default(cmd.exclude_default)
        && let Some(default) = catalog.default_language()
    {
        translations = translations.without_language(&default.slug);
    }

    let summary = DefaultsSummary {
        product,
        found: catalog.product(product).is_some(),
        translations,
    };

    Ok(finish(CommandSummary::Defaults(summary), ctx.format))
}
