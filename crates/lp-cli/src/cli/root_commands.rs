use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{
    FileCommands, IdeaCommands, LinkCommands, NoteCommands, PhaseCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the launchpad data directory for a project.
    Init(InitArgs),
    /// Startup phase checklist.
    Phase {
        #[command(subcommand)]
        action: PhaseCommands,
    },
    /// Show the roadmap overview.
    Roadmap,
    /// Idea box.
    Idea {
        #[command(subcommand)]
        action: IdeaCommands,
    },
    /// Useful links, with optional auto-summaries.
    Link {
        #[command(subcommand)]
        action: LinkCommands,
    },
    /// Uploaded files.
    File {
        #[command(subcommand)]
        action: FileCommands,
    },
    /// Testing feedback notes for this session.
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
    /// Export ideas or links to CSV.
    Export(ExportArgs),
    /// Read commands from stdin, one per line, against a single session.
    Shell,
}

/// Arguments for `lpad init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to --project or the current directory).
    pub path: Option<PathBuf>,
}

/// Arguments for `lpad export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// What to export.
    #[arg(value_enum)]
    pub target: ExportTarget,
    /// Output file (`ideas`, `links`) or directory (`all`). Defaults to the
    /// configured export files in the data directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportTarget {
    Ideas,
    Links,
    All,
}
