use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    source: &Path,
    name: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filename = stored_name(source, name)?;
    let bytes = std::fs::read(source)
        .with_context(|| format!("failed to read {}", source.display()))?;

    let uploaded = ctx.uploads.upload(&filename, &bytes)?;
    output(&uploaded, flags.format)
}

fn stored_name(source: &Path, name: Option<&str>) -> anyhow::Result<String> {
    match name {
        Some(name) => Ok(name.to_string()),
        None => source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("{} has no file name; pass --name", source.display())),
    }
}
