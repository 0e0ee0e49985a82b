//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod publish;

use std::path::Path;

use ci2conf_config::{CliSettings, Config, ConfigError, SiteConfig};
use ci2conf_confluence::{ConfluenceClient, ConfluenceSession};

pub(crate) use check::CheckArgs;
pub(crate) use publish::PublishArgs;

use crate::error::CliError;
use crate::output::Output;

/// Load configuration, printing a starter snippet when no file exists.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    cli_settings: &CliSettings,
    output: &Output,
) -> Result<Config, CliError> {
    Config::load(config_path, Some(cli_settings)).map_err(|err| {
        if matches!(err, ConfigError::NotFound(_)) {
            print_starter_config(output);
        }
        CliError::Config(err)
    })
}

fn print_starter_config(output: &Output) {
    output.info("To get started, create a ci2conf.toml:");
    output.info("\n[[site]]");
    output.info(r#"name = "main""#);
    output.info(r#"url = "https://confluence.example.com""#);
    output.info(r#"username = "ci-bot""#);
    output.info(r#"password = "${CONFLUENCE_TOKEN}""#);
    output.info("\n[publish]");
    output.info(r#"space = "DOCS""#);
    output.info(r#"page = "Release Builds""#);
    output.info("");
}

/// Create a session against the configured site.
pub(crate) fn create_session(site: &SiteConfig) -> ConfluenceSession {
    let client = ConfluenceClient::from_config(&site.url, &site.username, &site.password);
    ConfluenceSession::new(client)
}
