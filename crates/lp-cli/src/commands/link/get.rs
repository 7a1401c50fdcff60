use lp_store::RecordRef;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(target: &RecordRef, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = ctx.links.resolve(target)?;
    output(ctx.links.get(index)?, flags.format)
}
