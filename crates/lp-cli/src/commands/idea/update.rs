use anyhow::bail;
use lp_store::RecordRef;
use lp_store::updates::idea::{IdeaUpdate, IdeaUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    target: &RecordRef,
    name: Option<&str>,
    title: Option<&str>,
    description: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(name, title, description);
    if update.is_empty() {
        bail!("nothing to update: pass --name, --title or --description");
    }

    let index = ctx.ideas.resolve(target)?;
    let idea = ctx.ideas.update(index, update)?;
    output(&idea, flags.format)
}

fn build_update(name: Option<&str>, title: Option<&str>, description: Option<&str>) -> IdeaUpdate {
    let mut builder = IdeaUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(title) = title {
        builder = builder.title(title);
    }
    if let Some(description) = description {
        builder = builder.description(description);
    }
    builder.build()
}
