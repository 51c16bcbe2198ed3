//! Error types for the QQ Music API client.

use thiserror::Error;

/// Errors that can occur when talking to the QQ Music proxy server.
///
/// Transport-class failures ([`Http`](QQMusicError::Http),
/// [`Timeout`](QQMusicError::Timeout),
/// [`HttpStatus`](QQMusicError::HttpStatus)) are the only variants the
/// client retries; everything else propagates on first occurrence.
#[derive(Debug, Error)]
pub enum QQMusicError {
    /// The base URL and path did not combine into a valid request URL.
    ///
    /// Fatal: never retried, no transport attempt is made.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP transport failure (connection refused, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx HTTP status and a body that is
    /// not a response envelope (e.g. a gateway error page).
    #[error("server returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body could not be decoded as a response envelope.
    #[error("invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The envelope reported success (`code` 200) but carried no `data`.
    #[error("response contained no data")]
    EmptyData,

    /// The server reported a business-level failure (envelope `code`
    /// other than 200). Message and diagnostics are passed through
    /// verbatim.
    #[error("API error (code {code}): {message}{}", api_error_detail(.errors))]
    Api {
        /// Envelope status code (not the HTTP status).
        code: i64,
        /// Human-readable message from the server.
        message: String,
        /// Additional server-supplied diagnostics.
        errors: Option<Vec<String>>,
    },

    /// The endpoint requires a logged-in session (envelope code 401).
    #[error("not logged in")]
    NotLoggedIn,
}

impl QQMusicError {
    /// Whether this is a transient transport failure that may succeed on
    /// retry. Application-classified errors are never transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout | Self::HttpStatus(_))
    }
}

impl From<reqwest::Error> for QQMusicError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

fn api_error_detail(errors: &Option<Vec<String>>) -> String {
    match errors {
        Some(list) if !list.is_empty() => format!(" - {}", list.join("; ")),
        _ => String::new(),
    }
}

/// Convenience alias for `Result<T, QQMusicError>`.
pub type Result<T> = std::result::Result<T, QQMusicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_transient() {
        assert!(QQMusicError::Timeout.is_transient());
        assert!(QQMusicError::HttpStatus(502).is_transient());
    }

    #[test]
    fn classified_errors_are_not_transient() {
        let api = QQMusicError::Api {
            code: 500,
            message: "boom".into(),
            errors: None,
        };
        assert!(!api.is_transient());
        assert!(!QQMusicError::EmptyData.is_transient());
        assert!(!QQMusicError::InvalidUrl("x".into()).is_transient());
        assert!(!QQMusicError::NotLoggedIn.is_transient());
    }

    #[test]
    fn api_error_display_includes_diagnostics() {
        let err = QQMusicError::Api {
            code: 500,
            message: "boom".into(),
            errors: Some(vec!["bad mid".into(), "unknown song".into()]),
        };
        assert_eq!(
            err.to_string(),
            "API error (code 500): boom - bad mid; unknown song"
        );

        let bare = QQMusicError::Api {
            code: 400,
            message: "bad request".into(),
            errors: None,
        };
        assert_eq!(bare.to_string(), "API error (code 400): bad request");
    }
}
