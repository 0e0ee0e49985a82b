//! Environment variable expansion for site credentials.
//!
//! Config values like `password = "${CONFLUENCE_TOKEN}"` are resolved
//! against the process environment when the file is loaded, so secrets
//! never have to live in the file itself. `${VAR:-default}` falls back to
//! the default when `VAR` is unset; a plain `${VAR}` that is unset is a
//! hard error, because a silently empty credential would only surface as
//! an authentication failure during a build.

use std::borrow::Cow;

use crate::ConfigError;

/// Marker for a variable absent from the environment.
struct MissingVar;

/// Expand `${VAR}` and `${VAR:-default}` references in one config value.
///
/// `field` names the config field in the error message. Values without a
/// `${` are returned as-is; bare `$VAR` without braces is left alone.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| {
        std::env::var(var).map(Some).map_err(|_| MissingVar)
    })
    .map(Cow::into_owned)
    .map_err(|err| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} is not set", err.var_name),
    })
}
