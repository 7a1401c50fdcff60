use clap::Subcommand;
use lp_store::RecordRef;

/// Link commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LinkCommands {
    /// Add a link. Without --note the page is fetched and summarized.
    Add {
        #[arg(long)]
        url: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// List links in the order they were added.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a link by position or ID.
    Get {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
    },
    /// Update a link.
    Update {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a link.
    Delete {
        #[arg(allow_negative_numbers = true)]
        target: RecordRef,
    },
    /// Fetch a page and print its summary without saving anything.
    Summarize { url: String },
}
