mod delete;
mod list;
mod rename;
mod upload;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FileCommands;
use crate::context::AppContext;

/// Handle `lpad file`.
pub fn handle(action: &FileCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FileCommands::Upload { source, name } => upload::run(source, name.as_deref(), ctx, flags),
        FileCommands::List { limit } => list::run(*limit, ctx, flags),
        FileCommands::Rename { target, new_name } => rename::run(target, new_name, ctx, flags),
        FileCommands::Delete { target } => delete::run(target, ctx, flags),
    }
}
