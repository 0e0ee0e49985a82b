//! Mock session implementation for testing.
//!
//! Provides [`MockSession`] for unit testing without a wiki server.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::session::{RemoteAttachment, RemotePage, RemoteSpace, Session, SessionError};

/// One attachment upload recorded by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    /// Page the attachment was uploaded to.
    pub page_id: String,
    /// Filename the attachment was stored under.
    pub filename: String,
    /// Raw bytes received.
    pub data: Vec<u8>,
    /// Content type the caller declared.
    pub content_type: String,
    /// Upload comment.
    pub comment: String,
}

/// One page update recorded by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpdate {
    /// Page that was updated.
    pub page_id: String,
    /// Content that was stored.
    pub content: String,
    /// Edit comment that was recorded.
    pub comment: String,
    /// Version the caller was updating from.
    pub version: u32,
}

/// Mock session for testing.
///
/// Holds pages and spaces in memory and records every upload and update.
/// Use the builder methods to seed data or inject failures.
///
/// # Example
///
/// ```ignore
/// use ci2conf_core::{MockSession, Session};
///
/// let session = MockSession::new().with_space("DOCS", "Documentation");
///
/// let space = session.fetch_space("DOCS").unwrap();
/// assert!(space.is_some());
/// ```
#[derive(Debug)]
pub struct MockSession {
    pages: RwLock<Vec<RemotePage>>,
    spaces: RwLock<Vec<RemoteSpace>>,
    uploads: RwLock<Vec<RecordedUpload>>,
    updates: RwLock<Vec<RecordedUpdate>>,
    calls: RwLock<Vec<String>>,
    failing_uploads: HashSet<String>,
    fail_all_uploads: bool,
    fail_updates: bool,
    fail_fetch_page: bool,
    fail_fetch_space: bool,
}

impl Default for MockSession {
    fn default() -> Self {
        Self {
            pages: RwLock::new(Vec::new()),
            spaces: RwLock::new(Vec::new()),
            uploads: RwLock::new(Vec::new()),
            updates: RwLock::new(Vec::new()),
            calls: RwLock::new(Vec::new()),
            failing_uploads: HashSet::new(),
            fail_all_uploads: false,
            fail_updates: false,
            fail_fetch_page: false,
            fail_fetch_space: false,
        }
    }
}

impl MockSession {
    /// Create a new empty mock session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page the session can resolve.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, page: RemotePage) -> Self {
        self.pages.write().unwrap().push(page);
        self
    }

    /// Add a space the session can resolve.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_space(self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.spaces.write().unwrap().push(RemoteSpace {
            key: key.into(),
            name: name.into(),
        });
        self
    }

    /// Make every attachment upload fail.
    #[must_use]
    pub fn with_failing_uploads(mut self) -> Self {
        self.fail_all_uploads = true;
        self
    }

    /// Make uploads of one specific filename fail.
    #[must_use]
    pub fn with_failing_upload_of(mut self, filename: impl Into<String>) -> Self {
        self.failing_uploads.insert(filename.into());
        self
    }

    /// Make every page update fail.
    #[must_use]
    pub fn with_failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    /// Make every page fetch fail.
    #[must_use]
    pub fn with_failing_fetch_page(mut self) -> Self {
        self.fail_fetch_page = true;
        self
    }

    /// Make every space fetch fail.
    #[must_use]
    pub fn with_failing_fetch_space(mut self) -> Self {
        self.fail_fetch_space = true;
        self
    }

    /// Uploads recorded so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.read().unwrap().clone()
    }

    /// Page updates recorded so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.updates.read().unwrap().clone()
    }

    /// Names of all session methods invoked, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    fn record_call(&self, name: &str) {
        self.calls.write().unwrap().push(name.to_owned());
    }
}

impl Session for MockSession {
    fn fetch_page(&self, space: &str, title: &str) -> Result<Option<RemotePage>, SessionError> {
        self.record_call("fetch_page");
        if self.fail_fetch_page {
            return Err(SessionError::new("mock: fetch_page failed"));
        }
        Ok(self
            .pages
            .read()
            .unwrap()
            .iter()
            .find(|p| p.space == space && p.title == title)
            .cloned())
    }

    fn update_page(&self, page: &RemotePage, edit_comment: &str) -> Result<(), SessionError> {
        self.record_call("update_page");
        if self.fail_updates {
            return Err(SessionError::new("mock: update_page failed"));
        }
        self.updates.write().unwrap().push(RecordedUpdate {
            page_id: page.id.clone(),
            content: page.content.clone(),
            comment: edit_comment.to_owned(),
            version: page.version,
        });
        let mut pages = self.pages.write().unwrap();
        if let Some(stored) = pages.iter_mut().find(|p| p.id == page.id) {
            stored.content = page.content.clone();
            stored.version += 1;
        }
        Ok(())
    }

    fn fetch_space(&self, key: &str) -> Result<Option<RemoteSpace>, SessionError> {
        self.record_call("fetch_space");
        if self.fail_fetch_space {
            return Err(SessionError::new("mock: fetch_space failed"));
        }
        Ok(self
            .spaces
            .read()
            .unwrap()
            .iter()
            .find(|s| s.key == key)
            .cloned())
    }

    fn upload_attachment(
        &self,
        page_id: &str,
        filename: &str,
        data: &[u8],
        content_type: &str,
        comment: &str,
    ) -> Result<RemoteAttachment, SessionError> {
        self.record_call("upload_attachment");
        if self.fail_all_uploads || self.failing_uploads.contains(filename) {
            return Err(SessionError::new(format!(
                "mock: upload of '{filename}' failed"
            )));
        }
        self.uploads.write().unwrap().push(RecordedUpload {
            page_id: page_id.to_owned(),
            filename: filename.to_owned(),
            data: data.to_vec(),
            content_type: content_type.to_owned(),
            comment: comment.to_owned(),
        });
        Ok(RemoteAttachment {
            filename: filename.to_owned(),
            url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    fn sample_page() -> RemotePage {
        RemotePage {
            id: "100".to_owned(),
            space: "DOCS".to_owned(),
            title: "Release Notes".to_owned(),
            content: "<p>old</p>".to_owned(),
            version: 3,
            url: None,
        }
    }

    #[test]
    fn test_mock_session_is_send_sync() {
        assert_send_sync::<MockSession>();
    }

    #[test]
    fn test_new_empty() {
        let session = MockSession::new();

        assert!(session.fetch_page("DOCS", "Anything").unwrap().is_none());
        assert!(session.fetch_space("DOCS").unwrap().is_none());
    }

    #[test]
    fn test_with_page() {
        let session = MockSession::new().with_page(sample_page());

        let page = session.fetch_page("DOCS", "Release Notes").unwrap();

        assert_eq!(page, Some(sample_page()));
    }

    #[test]
    fn test_with_space() {
        let session = MockSession::new().with_space("DOCS", "Documentation");

        let space = session.fetch_space("DOCS").unwrap().unwrap();

        assert_eq!(space.key, "DOCS");
        assert_eq!(space.name, "Documentation");
    }

    #[test]
    fn test_update_page_records_and_bumps_version() {
        let session = MockSession::new().with_page(sample_page());

        let mut page = sample_page();
        page.content = "<p>new</p>".to_owned();
        session.update_page(&page, "updated").unwrap();

        let updates = session.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].content, "<p>new</p>");
        assert_eq!(updates[0].comment, "updated");
        assert_eq!(updates[0].version, 3);

        let stored = session
            .fetch_page("DOCS", "Release Notes")
            .unwrap()
            .unwrap();
        assert_eq!(stored.content, "<p>new</p>");
        assert_eq!(stored.version, 4);
    }

    #[test]
    fn test_upload_attachment_records() {
        let session = MockSession::new();

        let attachment = session
            .upload_attachment("100", "report.txt", b"hello", "text/plain", "from build")
            .unwrap();

        assert_eq!(attachment.filename, "report.txt");
        let uploads = session.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].page_id, "100");
        assert_eq!(uploads[0].data, b"hello");
        assert_eq!(uploads[0].content_type, "text/plain");
        assert_eq!(uploads[0].comment, "from build");
    }

    #[test]
    fn test_failing_upload_of_single_file() {
        let session = MockSession::new().with_failing_upload_of("bad.bin");

        assert!(
            session
                .upload_attachment("100", "bad.bin", b"x", "application/octet-stream", "c")
                .is_err()
        );
        assert!(
            session
                .upload_attachment("100", "good.txt", b"x", "text/plain", "c")
                .is_ok()
        );
        assert_eq!(session.uploads().len(), 1);
    }

    #[test]
    fn test_failing_fetch_page() {
        let session = MockSession::new().with_failing_fetch_page();

        assert!(session.fetch_page("DOCS", "Any").is_err());
    }

    #[test]
    fn test_calls_recorded_in_order() {
        let session = MockSession::new().with_space("DOCS", "Documentation");

        let _ = session.fetch_space("DOCS");
        let _ = session.fetch_page("DOCS", "Page");

        assert_eq!(session.calls(), vec!["fetch_space", "fetch_page"]);
    }
}
