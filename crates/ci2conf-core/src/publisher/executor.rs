//! Publish orchestrator implementation.

use std::fs;

use crate::build::BuildContext;
use crate::collector::collect_artifacts;
use crate::content_type::guess_content_type;
use crate::editor::apply_pipeline;
use crate::session::{RemotePage, Session};

use super::PublishSettings;
use super::report::PublishReport;

/// Runs the after-build publish workflow against a wiki session.
pub struct Publisher<'a, S: Session> {
    session: &'a S,
    settings: PublishSettings,
}

impl<'a, S: Session> Publisher<'a, S> {
    /// Create a new publisher.
    #[must_use]
    pub fn new(session: &'a S, settings: PublishSettings) -> Self {
        Self { session, settings }
    }

    /// Publish one build: upload attachments and rewrite the page.
    ///
    /// Never fails the caller. Every error is absorbed, logged and recorded
    /// in the returned report.
    pub fn publish(&self, context: &BuildContext) -> PublishReport {
        self.run(context, false)
    }

    /// Report what a publish would do without touching the remote site.
    ///
    /// Runs the gate, the collection step and the editor pipeline, but
    /// issues no uploads and no page update.
    pub fn dry_run(&self, context: &BuildContext) -> PublishReport {
        self.run(context, true)
    }

    fn run(&self, context: &BuildContext, dry_run: bool) -> PublishReport {
        let mut report = PublishReport {
            dry_run,
            ..PublishReport::default()
        };

        if !context.outcome.is_success() {
            tracing::info!(outcome = %context.outcome, "Build did not succeed, skipping publish");
            report.skipped = true;
            return report;
        }

        let comment = context.expand(&self.settings.edit_comment);

        let page = match self
            .session
            .fetch_page(&self.settings.space, &self.settings.page)
        {
            Ok(Some(page)) => page,
            Ok(None) => {
                report.record_error(format!(
                    "Page '{}' not found in space '{}'",
                    self.settings.page, self.settings.space
                ));
                return report;
            }
            Err(err) => {
                report.record_error(format!(
                    "Cannot fetch page '{}' in space '{}': {err}",
                    self.settings.page, self.settings.space
                ));
                return report;
            }
        };

        self.attach_files(context, &page, &comment, dry_run, &mut report);
        self.apply_editors(context, &page, &comment, dry_run, &mut report);

        report
    }

    /// Attach phase: collect files and upload each one individually.
    ///
    /// An unavailable workspace aborts this phase only; a per-file failure
    /// skips that file and the rest are still attempted.
    fn attach_files(
        &self,
        context: &BuildContext,
        page: &RemotePage,
        comment: &str,
        dry_run: bool,
        report: &mut PublishReport,
    ) {
        if !context.workspace.is_dir() {
            report.record_error(format!(
                "Workspace '{}' is unavailable, skipping attachments",
                context.workspace.display()
            ));
            return;
        }

        let files = collect_artifacts(
            context,
            self.settings.attach_archived_artifacts,
            self.settings.file_set.as_deref(),
        );
        if files.is_empty() {
            tracing::info!("No files to attach");
            return;
        }
        tracing::info!(count = files.len(), page = %page.id, "Attaching files");

        for path in files {
            let Some(filename) = path.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            let content_type = guess_content_type(&filename);

            if dry_run {
                tracing::info!(file = %filename, content_type, "Would upload attachment");
                report.uploaded.push(filename);
                continue;
            }

            let data = match fs::read(&path) {
                Ok(data) => data,
                Err(err) => {
                    tracing::warn!(file = %path.display(), error = %err, "Cannot read file, skipping");
                    report.upload_failures += 1;
                    continue;
                }
            };

            match self
                .session
                .upload_attachment(&page.id, &filename, &data, content_type, comment)
            {
                Ok(attachment) => {
                    tracing::info!(file = %attachment.filename, content_type, "Uploaded attachment");
                    report.uploaded.push(attachment.filename);
                }
                Err(err) => {
                    tracing::warn!(file = %filename, error = %err, "Upload failed, skipping");
                    report.upload_failures += 1;
                }
            }
        }
    }

    /// Edit phase: run the pipeline and write the page back.
    ///
    /// The page is written even when no editor changed anything.
    fn apply_editors(
        &self,
        context: &BuildContext,
        page: &RemotePage,
        comment: &str,
        dry_run: bool,
        report: &mut PublishReport,
    ) {
        let outcome = apply_pipeline(&self.settings.editors, context, &page.content);
        report.editors_applied = outcome.applied;
        report.editors_skipped = outcome.skipped;
        report.content_changed = outcome.content != page.content;

        if dry_run {
            tracing::info!(page = %page.id, changed = report.content_changed, "Would update page");
            report.page_updated = true;
            return;
        }

        let updated = RemotePage {
            content: outcome.content,
            ..page.clone()
        };
        match self.session.update_page(&updated, comment) {
            Ok(()) => {
                tracing::info!(page = %updated.id, "Updated page");
                report.page_updated = true;
            }
            Err(err) => {
                report.record_error(format!("Cannot update page '{}': {err}", updated.id));
            }
        }
    }
}
