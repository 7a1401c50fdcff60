use lp_store::RecordRef;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(target: &RecordRef, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = ctx.links.resolve(target)?;
    let removed = ctx.links.delete(index)?;
    tracing::info!(id = %removed.id, "link deleted");
    output(&removed, flags.format)
}
