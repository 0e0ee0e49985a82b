//! Errors the commands bubble up to `main`.

use ci2conf_config::ConfigError;

/// Anything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(String),
}
