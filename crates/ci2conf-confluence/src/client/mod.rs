//! Sync HTTP client for the Confluence Server/Data Center REST API.
//!
//! Authentication is HTTP basic (username plus password or API token),
//! precomputed into a header at construction. Non-2xx statuses are handled
//! by the per-endpoint methods rather than as transport errors.

mod attachments;
mod pages;
mod spaces;

use std::time::Duration;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use ureq::Agent;

use crate::error::ConfluenceError;

/// Applied to every request; Confluence instances behind slow proxies
/// still answer well within this.
const DEFAULT_TIMEOUT: u64 = 30;

/// Connection to one Confluence site.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl ConfluenceClient {
    /// Build a client for `base_url`, authenticating as `username` with
    /// `password` (a literal password or an API token).
    #[must_use]
    pub fn from_config(base_url: &str, username: &str, password: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        let credentials = BASE64_STANDARD.encode(format!("{username}:{password}"));

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header: format!("Basic {credentials}"),
        }
    }

    /// Root of the REST resource tree.
    fn api_url(&self) -> String {
        format!("{}/rest/api", self.base_url)
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Build the error for a failed response, capturing the body text.
///
/// Confluence puts its diagnostics in the response body, so losing it would
/// leave only a bare status code in the logs.
pub(crate) fn response_error(status: u16, body: &mut ureq::Body) -> ConfluenceError {
    let text = body
        .read_to_string()
        .unwrap_or_else(|_| String::from("(unable to read error body)"));
    ConfluenceError::Status { status, body: text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ConfluenceClient::from_config("https://wiki.example.com/", "user", "pass");

        assert_eq!(client.base_url(), "https://wiki.example.com");
        assert_eq!(client.api_url(), "https://wiki.example.com/rest/api");
    }

    #[test]
    fn test_auth_header_is_basic() {
        let client = ConfluenceClient::from_config("https://wiki.example.com", "user", "pass");

        // "user:pass" base64-encoded
        assert_eq!(client.auth_header, "Basic dXNlcjpwYXNz");
    }
}
