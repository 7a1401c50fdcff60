use lp_store::{RecordRef, StoreError, TestingNoteLog};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NoteCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::listing::numbered;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lpad note`. Notes are listed newest first, and positions refer to
/// that listing.
pub fn handle(action: &NoteCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        NoteCommands::Add { text } => {
            let note = ctx.notes.create(text)?;
            output(&note, flags.format)
        }
        NoteCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            output(&numbered(ctx.notes.newest_first(), limit), flags.format)
        }
        NoteCommands::Update { target, text } => {
            let index = resolve_listed(&ctx.notes, target)?;
            let updated = ctx.notes.update(index, text)?;
            output(&updated, flags.format)
        }
        NoteCommands::Delete { target } => {
            let index = resolve_listed(&ctx.notes, target)?;
            let removed = ctx.notes.delete(index)?;
            output(&removed, flags.format)
        }
    }
}

/// Map a newest-first position (or an id) to the log's storage index.
fn resolve_listed(notes: &TestingNoteLog, target: &RecordRef) -> Result<usize, StoreError> {
    let index = notes.resolve(target)?;
    match target {
        RecordRef::Position(_) => Ok(notes.len() - 1 - index),
        RecordRef::Id(_) => Ok(index),
    }
}
