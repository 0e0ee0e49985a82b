//! Publish orchestration.
//!
//! This module provides the [`Publisher`] struct that runs the full
//! after-build workflow against a wiki session:
//!
//! 1. Gate on the build outcome
//! 2. Fetch the target page
//! 3. Collect and upload attachments
//! 4. Run the markup editor pipeline
//! 5. Write the page back
//!
//! Publishing never fails the build it is attached to: every error is
//! absorbed into the returned [`PublishReport`] and logged.
//!
//! # Example
//!
//! ```ignore
//! use ci2conf_core::{
//!     BuildContext, BuildOutcome, MockSession, Publisher, PublishSettings, RemotePage,
//! };
//!
//! let session = MockSession::new().with_page(RemotePage {
//!     id: "100".to_owned(),
//!     space: "DOCS".to_owned(),
//!     title: "Builds".to_owned(),
//!     content: "<p>builds</p>".to_owned(),
//!     version: 1,
//!     url: None,
//! });
//! let settings = PublishSettings::new("DOCS", "Builds");
//! let publisher = Publisher::new(&session, settings);
//!
//! let context = BuildContext::new(BuildOutcome::Success, "/tmp");
//! let report = publisher.publish(&context);
//! assert!(report.page_updated);
//! ```

mod executor;
mod report;

pub use executor::Publisher;
pub use report::PublishReport;

use crate::editor::MarkupEditor;

/// Default edit and attachment comment template.
pub const DEFAULT_EDIT_COMMENT: &str = "Published from build: ${BUILD_URL}";

/// Configuration for one publish target.
#[derive(Debug, Clone)]
pub struct PublishSettings {
    /// Key of the space holding the target page.
    pub space: String,
    /// Title of the target page.
    pub page: String,
    /// Whether archived artifacts are attached.
    pub attach_archived_artifacts: bool,
    /// Comma-separated glob patterns selecting workspace files to attach.
    pub file_set: Option<String>,
    /// Edit and attachment comment template, environment-variable-expanded
    /// per build.
    pub edit_comment: String,
    /// Markup editors applied to the page content, in order.
    pub editors: Vec<MarkupEditor>,
}

impl PublishSettings {
    /// Settings targeting one page, with no attachments and no editors.
    #[must_use]
    pub fn new(space: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            page: page.into(),
            attach_archived_artifacts: false,
            file_set: None,
            edit_comment: DEFAULT_EDIT_COMMENT.to_owned(),
            editors: Vec::new(),
        }
    }
}
