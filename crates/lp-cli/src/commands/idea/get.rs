use lp_store::RecordRef;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(target: &RecordRef, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = ctx.ideas.resolve(target)?;
    output(ctx.ideas.get(index)?, flags.format)
}
