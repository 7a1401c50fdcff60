use anyhow::bail;
use lp_store::RecordRef;
use lp_store::updates::link::LinkUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    target: &RecordRef,
    url: Option<&str>,
    note: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = LinkUpdateBuilder::new();
    if let Some(url) = url {
        builder = builder.url(url);
    }
    if let Some(note) = note {
        builder = builder.note(note);
    }
    let update = builder.build();
    if update.is_empty() {
        bail!("nothing to update: pass --url or --note");
    }

    let index = ctx.links.resolve(target)?;
    let link = ctx.links.update(index, update)?;
    output(&link, flags.format)
}
