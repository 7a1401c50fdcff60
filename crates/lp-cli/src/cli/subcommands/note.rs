use clap::Subcommand;
use lp_store::RecordRef;

/// Testing note commands. Notes are kept for the current session only.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    /// Log a testing note.
    Add { text: String },
    /// List notes, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Replace the text of a note, by its position in `note list` or by ID.
    Update {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
        text: String,
    },
    /// Delete a note by its position in `note list` or by ID.
    Delete {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
    },
}
