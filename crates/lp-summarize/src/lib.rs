//! # lp-summarize
//!
//! Turns a URL into a short text note: fetch the page with a bounded
//! timeout, take the text of its leading `<p>` elements, and cap the length.
//! Failures never escape [`Summarizer::summarize`]; they come back as an
//! `"Error fetching content: ..."` string so the caller can store it as-is.

pub mod error;
pub mod extract;
pub mod http;

use lp_config::SummarizerConfig;

pub use error::SummarizeError;
pub use extract::{EMPTY_SUMMARY, NO_CONTENT, summarize_html};

pub const FETCH_ERROR_PREFIX: &str = "Error fetching content: ";

/// HTTP client plus the limits that shape a summary.
#[derive(Debug, Clone)]
pub struct Summarizer {
    http: reqwest::Client,
    config: SummarizerConfig,
}

impl Summarizer {
    /// Build a summarizer whose requests time out after `config.timeout()`.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::Http` if the HTTP client cannot be built.
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub const fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize the page at `url`. Always returns a displayable string.
    pub async fn summarize(&self, url: &str) -> String {
        match self.fetch(url).await {
            Ok(html) => summarize_html(&html, &self.config),
            Err(error) => {
                tracing::warn!(url, %error, "summary fetch failed");
                fetch_error_message(&error)
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, SummarizeError> {
        tracing::debug!(url, "fetching page");
        let resp = self.http.get(url).send().await?;
        summarize_body(resp).await
    }
}

/// Status-check `resp` and read its body as text.
///
/// # Errors
///
/// Returns `SummarizeError::Status` for a non-success status, or
/// `SummarizeError::Http` if the body cannot be read.
pub async fn summarize_body(resp: reqwest::Response) -> Result<String, SummarizeError> {
    let resp = http::check_response(resp)?;
    Ok(resp.text().await?)
}

/// Summarize an already-received response, mapping failures to the
/// `"Error fetching content: ..."` message.
pub async fn summarize_response(resp: reqwest::Response, config: &SummarizerConfig) -> String {
    match summarize_body(resp).await {
        Ok(html) => summarize_html(&html, config),
        Err(error) => fetch_error_message(&error),
    }
}

fn fetch_error_message(error: &SummarizeError) -> String {
    format!("{FETCH_ERROR_PREFIX}{error}")
}
