use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Phase { action } => commands::phase::handle(&action, ctx, flags),
        Commands::Roadmap => commands::roadmap::handle(flags),
        Commands::Idea { action } => commands::idea::handle(&action, ctx, flags),
        Commands::Link { action } => commands::link::handle(&action, ctx, flags).await,
        Commands::File { action } => commands::file::handle(&action, ctx, flags),
        Commands::Note { action } => commands::note::handle(&action, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Init(_) => bail!("init does not run against an open project"),
        Commands::Shell => bail!("shell cannot be nested"),
    }
}
