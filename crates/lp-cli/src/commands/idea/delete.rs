use lp_store::RecordRef;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(target: &RecordRef, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = ctx.ideas.resolve(target)?;
    let removed = ctx.ideas.delete(index)?;
    tracing::info!(id = %removed.id, "idea deleted");
    output(&removed, flags.format)
}
