use anyhow::bail;

use super::summarize::fetch_summary;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    url: &str,
    note: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if url.trim().is_empty() {
        bail!("Validation error: url must not be blank");
    }

    // A blank note counts as no note.
    let note = match note.filter(|note| !note.trim().is_empty()) {
        Some(note) => note.to_string(),
        None => fetch_summary(&ctx.summarizer, url).await,
    };
    let link = ctx.links.create(url, &note)?;
    output(&link, flags.format)
}
