use clap::Subcommand;
use lp_store::RecordRef;

/// Idea box commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IdeaCommands {
    /// Add an idea.
    Add {
        /// Who had the idea.
        #[arg(long)]
        name: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List ideas in the order they were added.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show an idea by position or ID.
    Get {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
    },
    /// Update an idea.
    Update {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an idea.
    Delete {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
    },
}
