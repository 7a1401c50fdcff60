use anyhow::Context;
use lp_core::tracker::PhaseItem;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PhaseCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lpad phase`.
pub fn handle(action: &PhaseCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PhaseCommands::List => output(&ctx.phases.items(), flags.format),
        PhaseCommands::Check { position } => {
            ctx.phases.check(*position)?;
            output(&item_at(ctx, *position)?, flags.format)
        }
        PhaseCommands::Uncheck { position } => {
            ctx.phases.uncheck(*position)?;
            output(&item_at(ctx, *position)?, flags.format)
        }
    }
}

fn item_at(ctx: &AppContext, position: usize) -> anyhow::Result<PhaseItem> {
    ctx.phases
        .items()
        .into_iter()
        .find(|item| item.position == position)
        .with_context(|| format!("phase {position} not found"))
}
