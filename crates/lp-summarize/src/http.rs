//! Response status check for the page fetch.

use crate::error::SummarizeError;

/// Pass successful responses through; turn any other status into
/// [`SummarizeError::Status`].
pub fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SummarizeError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(SummarizeError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn check_response_server_error() {
        let err = check_response(mock_response(500)).unwrap_err();
        assert!(matches!(err, SummarizeError::Status { status: 500, .. }));
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
    }

    #[test]
    fn check_response_not_found() {
        let err = check_response(mock_response(404)).unwrap_err();
        assert!(matches!(err, SummarizeError::Status { status: 404, .. }));
    }

    #[test]
    fn check_response_success() {
        assert!(check_response(mock_response(200)).is_ok());
    }
}
