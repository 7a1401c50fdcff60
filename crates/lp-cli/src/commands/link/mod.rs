mod add;
mod delete;
mod get;
mod list;
mod summarize;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LinkCommands;
use crate::context::AppContext;

/// Handle `lpad link`.
pub async fn handle(
    action: &LinkCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LinkCommands::Add { url, note } => add::run(url, note.as_deref(), ctx, flags).await,
        LinkCommands::List { limit } => list::run(*limit, ctx, flags),
        LinkCommands::Get { target } => get::run(target, ctx, flags),
        LinkCommands::Update { target, url, note } => {
            update::run(target, url.as_deref(), note.as_deref(), ctx, flags)
        }
        LinkCommands::Delete { target } => delete::run(target, ctx, flags),
        LinkCommands::Summarize { url } => summarize::run(url, ctx, flags).await,
    }
}
