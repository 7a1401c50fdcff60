//! Summarizer error types.

use thiserror::Error;

/// Why a page could not be fetched. Never surfaced to callers of
/// [`Summarizer::summarize`](crate::Summarizer::summarize); it becomes the
/// reason in the returned message.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Transport failure, timeout, or unreadable body.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },
}
