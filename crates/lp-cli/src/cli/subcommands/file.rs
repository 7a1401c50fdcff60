use std::path::PathBuf;

use clap::Subcommand;
use lp_store::RecordRef;

/// Uploaded file commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FileCommands {
    /// Copy a local file into the uploads directory.
    Upload {
        source: PathBuf,
        /// Stored file name (defaults to the source file name).
        #[arg(long)]
        name: Option<String>,
    },
    /// List uploaded files.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Rename an uploaded file.
    Rename {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
        new_name: String,
    },
    /// Delete an uploaded file and its metadata.
    Delete {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
    },
}
