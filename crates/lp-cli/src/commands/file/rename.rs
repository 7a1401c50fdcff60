use lp_store::RecordRef;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    target: &RecordRef,
    new_name: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let index = ctx.uploads.resolve(target)?;
    let renamed = ctx.uploads.rename(index, new_name)?;
    output(&renamed, flags.format)
}
