use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    name: &str,
    title: &str,
    description: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let idea = ctx.ideas.create(name, title, description)?;
    output(&idea, flags.format)
}
