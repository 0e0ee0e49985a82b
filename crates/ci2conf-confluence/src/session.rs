//! Session adapter over the REST client.
//!
//! [`ConfluenceSession`] implements [`ci2conf_core::Session`] so the
//! publisher can stay wire-agnostic. Client errors collapse into the
//! session's single message-only error kind, with the full source chain
//! joined into the message.

use std::error::Error;

use ci2conf_core::{RemoteAttachment, RemotePage, RemoteSpace, Session, SessionError};

use crate::client::ConfluenceClient;
use crate::types::Page;

/// Wiki session backed by the Confluence REST API.
pub struct ConfluenceSession {
    client: ConfluenceClient,
}

impl ConfluenceSession {
    /// Create a session over the given client.
    #[must_use]
    pub fn new(client: ConfluenceClient) -> Self {
        Self { client }
    }
}

impl Session for ConfluenceSession {
    fn fetch_page(&self, space: &str, title: &str) -> Result<Option<RemotePage>, SessionError> {
        let page = self
            .client
            .find_page(space, title)
            .map_err(|e| SessionError::new(error_chain(&e)))?;
        Ok(page.map(|p| remote_page(self.client.base_url(), space, p)))
    }

    fn update_page(&self, page: &RemotePage, edit_comment: &str) -> Result<(), SessionError> {
        self.client
            .update_page(
                &page.id,
                &page.title,
                &page.content,
                page.version,
                edit_comment,
            )
            .map(|_| ())
            .map_err(|e| SessionError::new(error_chain(&e)))
    }

    fn fetch_space(&self, key: &str) -> Result<Option<RemoteSpace>, SessionError> {
        let space = self
            .client
            .get_space(key)
            .map_err(|e| SessionError::new(error_chain(&e)))?;
        Ok(space.map(|s| RemoteSpace {
            key: s.key,
            name: s.name,
        }))
    }

    fn upload_attachment(
        &self,
        page_id: &str,
        filename: &str,
        data: &[u8],
        content_type: &str,
        comment: &str,
    ) -> Result<RemoteAttachment, SessionError> {
        let attachment = self
            .client
            .upload_attachment(page_id, filename, data, content_type, comment)
            .map_err(|e| SessionError::new(error_chain(&e)))?;
        let url = attachment
            .links
            .and_then(|l| l.download)
            .map(|download| format!("{}{}", self.client.base_url(), download));
        Ok(RemoteAttachment {
            filename: attachment.title,
            url,
        })
    }
}

/// Map a wire page onto the publisher's remote page.
///
/// The space key falls back to the queried key when the response carries no
/// space expansion; missing body expansions map to empty content.
fn remote_page(base_url: &str, space_key: &str, page: Page) -> RemotePage {
    let content = page
        .body
        .and_then(|b| b.storage)
        .map(|s| s.value)
        .unwrap_or_default();
    let space = page
        .space
        .map_or_else(|| space_key.to_owned(), |s| s.key);
    let url = page
        .links
        .and_then(|l| l.webui)
        .map(|webui| format!("{base_url}{webui}"));

    RemotePage {
        id: page.id,
        space,
        title: page.title,
        content,
        version: page.version.number,
        url,
    }
}

/// Walk the error source chain and join all messages.
fn error_chain(err: &dyn Error) -> String {
    let mut msgs = vec![err.to_string()];
    let mut source = err.source();
    while let Some(s) = source {
        msgs.push(s.to_string());
        source = s.source();
    }
    msgs.join(": ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ConfluenceError;

    fn wire_page(json: &str) -> Page {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_remote_page_maps_expanded_fields() {
        let page = wire_page(
            r#"{
                "id": "12345",
                "title": "Release Builds",
                "space": {"key": "DOCS"},
                "version": {"number": 7},
                "body": {"storage": {"value": "<p>hello</p>"}},
                "_links": {"webui": "/display/DOCS/Release+Builds"}
            }"#,
        );

        let remote = remote_page("https://wiki.example.com", "QUERIED", page);

        assert_eq!(
            remote,
            RemotePage {
                id: "12345".to_owned(),
                space: "DOCS".to_owned(),
                title: "Release Builds".to_owned(),
                content: "<p>hello</p>".to_owned(),
                version: 7,
                url: Some("https://wiki.example.com/display/DOCS/Release+Builds".to_owned()),
            }
        );
    }

    #[test]
    fn test_remote_page_defaults_without_expansions() {
        let page = wire_page(r#"{"id": "1", "title": "Bare", "version": {"number": 2}}"#);

        let remote = remote_page("https://wiki.example.com", "DOCS", page);

        assert_eq!(remote.space, "DOCS");
        assert_eq!(remote.content, "");
        assert_eq!(remote.url, None);
    }

    #[test]
    fn test_error_chain_joins_sources() {
        let io = std::io::Error::other("connection reset");
        let err = ConfluenceError::Transport(ureq::Error::Io(io));

        let chain = error_chain(&err);

        assert!(chain.starts_with("request failed: "));
        assert!(chain.contains("connection reset"));
    }

    #[test]
    fn test_error_chain_single_message() {
        let err = ConfluenceError::Status {
            status: 403,
            body: "forbidden".to_owned(),
        };

        assert_eq!(error_chain(&err), "server returned 403: forbidden");
    }
}
