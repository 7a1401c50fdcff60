use lp_store::RecordRef;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(target: &RecordRef, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = ctx.uploads.resolve(target)?;
    let removed = ctx.uploads.delete(index)?;
    tracing::info!(id = %removed.id, path = %removed.path, "uploaded file deleted");
    output(&removed, flags.format)
}
