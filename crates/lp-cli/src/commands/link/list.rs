use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::listing::numbered;
use crate::context::AppContext;
use crate::output::output;

pub fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    output(&numbered(ctx.links.snapshot(), limit), flags.format)
}
