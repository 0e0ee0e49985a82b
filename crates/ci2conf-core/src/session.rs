//! Abstraction over the wiki backend.
//!
//! The publisher only ever talks to a [`Session`]; the HTTP client lives in a
//! separate crate and the tests use the in-crate `MockSession`.

use std::fmt;

/// A page as held by the remote wiki.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePage {
    /// Content id assigned by the wiki.
    pub id: String,
    /// Key of the space the page lives in.
    pub space: String,
    /// Page title.
    pub title: String,
    /// Page body in storage format.
    pub content: String,
    /// Current version number.
    pub version: u32,
    /// Browser URL of the page, when the backend reports one.
    pub url: Option<String>,
}

/// A space as held by the remote wiki.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpace {
    /// Space key.
    pub key: String,
    /// Human-readable space name.
    pub name: String,
}

/// Result of uploading one attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAttachment {
    /// Filename under which the attachment is stored.
    pub filename: String,
    /// Download URL, when the backend reports one.
    pub url: Option<String>,
}

/// Error from a session operation.
///
/// Backends map their transport and protocol failures into a single
/// message; the publisher only logs these, it never matches on them.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SessionError {
    message: String,
}

impl SessionError {
    /// Create an error carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Connection to a wiki that can resolve pages and spaces, upload
/// attachments and store page content.
pub trait Session: Send + Sync {
    /// Fetch a page by space key and title.
    ///
    /// Returns `Ok(None)` when the page does not exist.
    fn fetch_page(&self, space: &str, title: &str) -> Result<Option<RemotePage>, SessionError>;

    /// Store new content for an existing page.
    ///
    /// `page.content` holds the body to store; the backend bumps the
    /// version past `page.version` and records `edit_comment` in the page
    /// history.
    fn update_page(&self, page: &RemotePage, edit_comment: &str) -> Result<(), SessionError>;

    /// Fetch a space by key.
    ///
    /// Returns `Ok(None)` when the space does not exist.
    fn fetch_space(&self, key: &str) -> Result<Option<RemoteSpace>, SessionError>;

    /// Upload one file as an attachment of the given page, replacing any
    /// existing attachment with the same filename.
    fn upload_attachment(
        &self,
        page_id: &str,
        filename: &str,
        data: &[u8],
        content_type: &str,
        comment: &str,
    ) -> Result<RemoteAttachment, SessionError>;
}

impl fmt::Display for RemotePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} (v{})", self.space, self.title, self.version)
    }
}
