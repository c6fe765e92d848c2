use anyhow::Result;

use super::super::{args::PendingCommand, context::CommandContext};
use super::{CommandResult, CommandSummary, PendingSummary, helper::finish};
use crate::core::{
    ProductId, ProductState, RequestContext, ScreenContext, VariableProductStateDetector,
};

pub fn pending(cmd: PendingCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let product = ProductId(cmd.product);

    let request = RequestContext {
        screen: match (cmd.screen_post_type, cmd.screen_action) {
            (Some(post_type), Some(action)) => Some(ScreenContext::new(post_type, action)),
            _ => None,
        },
        from_post: cmd.from_post.map(ProductId),
        new_lang: cmd.new_lang,
        variation_children: None,
    };

    let detector = VariableProductStateDetector::new(&ctx.catalog);
    let state = detector.classify(product, &request);

    let summary = PendingSummary {
        product,
        state,
        pending: state == Some(ProductState::SimplePendingVariable),
        maybe_variable: state.is_some_and(ProductState::is_variable_or_pending),
    };

    Ok(finish(CommandSummary::Pending(summary), ctx.format))
}
