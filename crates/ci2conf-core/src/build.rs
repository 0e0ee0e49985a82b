//! Build context consumed by a publish operation.
//!
//! A [`BuildContext`] is the read-only view of one finished CI build: its
//! outcome, the workspace it ran in, where archived artifacts live, and an
//! environment snapshot used to expand `${VAR}` references in comment
//! templates, file-set patterns and generated markup.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Outcome of a finished build, as reported by the CI host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Build completed without failures.
    Success,
    /// Build completed but was marked unstable (e.g. test failures).
    Unstable,
    /// Build failed.
    Failure,
    /// Build was not run.
    NotBuilt,
    /// Build was aborted before completion.
    Aborted,
}

impl BuildOutcome {
    /// True only for [`BuildOutcome::Success`]; everything else gates
    /// publishing off.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Success => "SUCCESS",
            Self::Unstable => "UNSTABLE",
            Self::Failure => "FAILURE",
            Self::NotBuilt => "NOT_BUILT",
            Self::Aborted => "ABORTED",
        };
        f.write_str(status)
    }
}

/// Error parsing a [`BuildOutcome`] from its status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown build outcome '{0}' (expected SUCCESS, UNSTABLE, FAILURE, NOT_BUILT or ABORTED)")]
pub struct ParseOutcomeError(String);

impl FromStr for BuildOutcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUCCESS" => Ok(Self::Success),
            "UNSTABLE" => Ok(Self::Unstable),
            "FAILURE" => Ok(Self::Failure),
            "NOT_BUILT" => Ok(Self::NotBuilt),
            "ABORTED" => Ok(Self::Aborted),
            _ => Err(ParseOutcomeError(s.to_owned())),
        }
    }
}

/// Read-only view of one finished build.
///
/// # Example
///
/// ```
/// use ci2conf_core::{BuildContext, BuildOutcome};
///
/// let context = BuildContext::new(BuildOutcome::Success, "/var/ci/workspace")
///     .with_var("BUILD_URL", "https://ci.example.com/job/42/");
///
/// assert_eq!(
///     context.expand("Published from build: ${BUILD_URL}"),
///     "Published from build: https://ci.example.com/job/42/"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Outcome of the build.
    pub outcome: BuildOutcome,
    /// Root of the build workspace.
    pub workspace: PathBuf,
    /// Directory holding archived artifacts, if the build archived any.
    pub artifacts_dir: Option<PathBuf>,
    /// Environment snapshot for `${VAR}` expansion.
    env: HashMap<String, String>,
}

impl BuildContext {
    /// Create a context for a build with the given outcome and workspace.
    #[must_use]
    pub fn new(outcome: BuildOutcome, workspace: impl Into<PathBuf>) -> Self {
        Self {
            outcome,
            workspace: workspace.into(),
            artifacts_dir: None,
            env: HashMap::new(),
        }
    }

    /// Set the archived-artifacts directory.
    #[must_use]
    pub fn with_artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = Some(dir.into());
        self
    }

    /// Add a single variable to the environment snapshot.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Extend the environment snapshot, overwriting existing entries.
    #[must_use]
    pub fn with_env(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env.extend(vars);
        self
    }

    /// Look up a variable in the environment snapshot.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    /// Expand `$VAR`, `${VAR}` and `${VAR:-default}` references against the
    /// environment snapshot.
    ///
    /// Unknown variables are left untouched so that page markup containing
    /// literal `$` text survives a publish unmangled.
    #[must_use]
    pub fn expand(&self, template: &str) -> String {
        // Fast path: no expansion needed
        if !template.contains('$') {
            return template.to_owned();
        }

        shellexpand::env_with_context_no_errors(template, |var| self.env.get(var)).into_owned()
    }
}
