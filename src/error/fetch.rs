//! Errors raised while loading posts from the remote endpoint.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure to obtain a post list.
///
/// Every variant is handled the same way by the view (logged, then an empty
/// result set). The distinction only matters for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of posts.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether a retry could plausibly succeed. Retries are never performed;
    /// this only feeds the log line.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport(HttpError::InvalidUrl(_)) => false,
            FetchError::Transport(_) => true,
            FetchError::Status { status } => *status >= 500 || *status == 429 || *status == 408,
            FetchError::Decode(_) => false,
        }
    }

    /// Short message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport(HttpError::InvalidUrl(_)) => {
                "Could not load posts: invalid endpoint".to_string()
            }
            FetchError::Transport(_) => "Could not load posts: server unreachable".to_string(),
            FetchError::Status { status } => format!("Could not load posts (HTTP {})", status),
            FetchError::Decode(_) => "Could not load posts: unexpected response".to_string(),
        }
    }
}
