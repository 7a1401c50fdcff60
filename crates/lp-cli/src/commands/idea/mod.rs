mod add;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IdeaCommands;
use crate::context::AppContext;

/// Handle `lpad idea`.
pub fn handle(action: &IdeaCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        IdeaCommands::Add {
            name,
            title,
            description,
        } => add::run(name, title, description, ctx, flags),
        IdeaCommands::List { limit } => list::run(*limit, ctx, flags),
        IdeaCommands::Get { target } => get::run(target, ctx, flags),
        IdeaCommands::Update {
            target,
            name,
            title,
            description,
        } => update::run(
            target,
            name.as_deref(),
            title.as_deref(),
            description.as_deref(),
            ctx,
            flags,
        ),
        IdeaCommands::Delete { target } => delete::run(target, ctx, flags),
    }
}
