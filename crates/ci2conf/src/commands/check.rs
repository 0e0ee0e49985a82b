//! `ci2conf check` command implementation.

use std::path::PathBuf;

use ci2conf_config::CliSettings;
use ci2conf_core::Session;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover ci2conf.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site to check (default: first configured site).
    #[arg(long)]
    site: Option<String>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Runs both existence checks even when the first fails, so one run
    /// reports everything that is wrong with the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid or a check fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            site: self.site,
            ..CliSettings::default()
        };
        let config = super::load_config(self.config.as_deref(), &cli_settings, &output)?;

        let site = config.resolve_site()?;
        let settings = config.publish_settings()?;
        let session = super::create_session(site);

        output.info(&format!("Checking {} as {}", site.url, site.username));

        let mut failures = 0;

        match session.fetch_space(&settings.space) {
            Ok(Some(space)) => {
                output.success(&format!("OK: space '{}' ({})", space.key, space.name));
            }
            Ok(None) => {
                output.error(&format!("FAIL: space '{}' not found", settings.space));
                failures += 1;
            }
            Err(err) => {
                output.error(&format!(
                    "FAIL: cannot fetch space '{}': {err}",
                    settings.space
                ));
                failures += 1;
            }
        }

        match session.fetch_page(&settings.space, &settings.page) {
            Ok(Some(page)) => {
                output.success(&format!("OK: page '{}' (v{})", page.title, page.version));
            }
            Ok(None) => {
                output.error(&format!(
                    "FAIL: page '{}' not found in space '{}'",
                    settings.page, settings.space
                ));
                failures += 1;
            }
            Err(err) => {
                output.error(&format!(
                    "FAIL: cannot fetch page '{}': {err}",
                    settings.page
                ));
                failures += 1;
            }
        }

        if failures > 0 {
            return Err(CliError::Validation(format!("{failures} check(s) failed")));
        }
        output.success("\nAll checks passed.");
        Ok(())
    }
}
