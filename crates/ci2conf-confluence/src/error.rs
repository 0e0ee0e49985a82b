//! Errors surfaced by the REST client.

/// Failure talking to the Confluence REST API.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    /// The request never completed (connect, TLS, timeout).
    #[error("request failed")]
    Transport(#[from] ureq::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, which usually carries the server's diagnostic.
        body: String,
    },

    /// A response body did not decode as the expected JSON.
    #[error("unexpected response body")]
    Json(#[from] serde_json::Error),
}
