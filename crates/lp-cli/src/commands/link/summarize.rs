use lp_summarize::Summarizer;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct PageSummary<'a> {
    url: &'a str,
    summary: String,
}

pub async fn run(url: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = fetch_summary(&ctx.summarizer, url).await;
    output(&PageSummary { url, summary }, flags.format)
}

/// Summarize `url` behind a spinner. Never fails; fetch errors come back as
/// the summary text.
pub async fn fetch_summary(summarizer: &Summarizer, url: &str) -> String {
    let spinner = Spinner::start(&format!("Summarizing {url}"));
    let summary = summarizer.summarize(url.trim()).await;
    spinner.finish_clear();
    summary
}
