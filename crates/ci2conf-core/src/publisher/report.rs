//! Publish outcome report.

/// What one publish operation did.
///
/// The report exists for logging and display only. Publishing never fails
/// its caller, so nothing here drives control flow; a degraded publish is
/// still a completed publish.
#[derive(Debug, Default)]
pub struct PublishReport {
    /// The build outcome gated publishing off; nothing was attempted.
    pub skipped: bool,
    /// The operation ran in dry-run mode and made no remote changes.
    pub dry_run: bool,
    /// Filenames uploaded (or, in dry-run mode, that would be uploaded).
    pub uploaded: Vec<String>,
    /// Number of files that failed to read or upload.
    pub upload_failures: usize,
    /// Number of markup editors that applied.
    pub editors_applied: usize,
    /// One line per skipped editor, naming the kind and the failure.
    pub editors_skipped: Vec<String>,
    /// Whether the page was written back (or would be, in dry-run mode).
    pub page_updated: bool,
    /// Whether the written content differs from what was fetched.
    pub content_changed: bool,
    /// Human-readable error lines absorbed during the publish.
    pub errors: Vec<String>,
}

impl PublishReport {
    pub(crate) fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.errors.push(message);
    }

    /// True when anything was logged as failed or skipped.
    #[must_use]
    pub fn degraded(&self) -> bool {
        !self.errors.is_empty() || self.upload_failures > 0 || !self.editors_skipped.is_empty()
    }
}
