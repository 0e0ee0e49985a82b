//! `ci2conf publish` command implementation.

use std::path::PathBuf;

use ci2conf_config::CliSettings;
use ci2conf_core::{BuildContext, BuildOutcome, PublishReport, Publisher};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Path to configuration file (default: auto-discover ci2conf.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site to publish to (default: first configured site).
    #[arg(long)]
    site: Option<String>,

    /// Space key to publish to (overrides config).
    #[arg(long)]
    space: Option<String>,

    /// Page title to publish to (overrides config).
    #[arg(long)]
    page: Option<String>,

    /// Comma-separated workspace file patterns to attach (overrides config).
    #[arg(long)]
    file_set: Option<String>,

    /// Edit comment template (overrides config).
    #[arg(long)]
    comment: Option<String>,

    /// Build outcome gating the publish.
    #[arg(long, env = "BUILD_STATUS", default_value = "SUCCESS")]
    status: BuildOutcome,

    /// Build workspace directory.
    #[arg(long, env = "WORKSPACE", default_value = ".")]
    workspace: PathBuf,

    /// Directory holding archived build artifacts.
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,

    /// Preview the publish without writing to the wiki.
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output (show editor and upload debug logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error only for configuration problems found before the
    /// publish starts. The publish itself absorbs its failures into the
    /// report so a broken wiki never fails the build.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            site: self.site,
            space: self.space,
            page: self.page,
            file_set: self.file_set,
            comment: self.comment,
        };
        let config = super::load_config(self.config.as_deref(), &cli_settings, &output)?;

        let site = config.resolve_site()?;
        let settings = config.publish_settings()?;
        let session = super::create_session(site);

        // The build environment is the template context for the comment,
        // file patterns and editor markup
        let mut context =
            BuildContext::new(self.status, self.workspace).with_env(std::env::vars());
        if let Some(dir) = self.artifacts_dir {
            context = context.with_artifacts_dir(dir);
        }

        output.info(&format!(
            "Publishing to {} ({}/{})",
            site.url, settings.space, settings.page
        ));

        let publisher = Publisher::new(&session, settings);
        let report = if self.dry_run {
            publisher.dry_run(&context)
        } else {
            publisher.publish(&context)
        };

        print_report(&output, &report);
        Ok(())
    }
}

fn print_report(output: &Output, report: &PublishReport) {
    if report.dry_run {
        output.highlight("\n[DRY RUN] No changes made.");
    }

    if report.skipped {
        output.warning("Publish skipped: build was not successful.");
        return;
    }

    if !report.uploaded.is_empty() {
        output.info(&format!("\nAttachments ({}):", report.uploaded.len()));
        for name in &report.uploaded {
            output.info(&format!("  -> {name}"));
        }
    }
    if report.upload_failures > 0 {
        output.warning(&format!("Attachments failed: {}", report.upload_failures));
    }

    if report.editors_applied > 0 {
        output.info(&format!("Editors applied: {}", report.editors_applied));
    }
    for skipped in &report.editors_skipped {
        output.warning(&format!("Editor skipped: {skipped}"));
    }

    for error in &report.errors {
        output.warning(&format!("Warning: {error}"));
    }

    if report.page_updated {
        if report.dry_run {
            output.success("\nPage would be updated.");
        } else if report.content_changed {
            output.success("\nPage updated.");
        } else {
            output.success("\nPage updated (content unchanged).");
        }
    }

    if report.degraded() {
        output.warning("\nPublish finished with warnings; build result is unaffected.");
    }
}
