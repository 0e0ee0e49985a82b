//! Configuration management for ci2conf.
//!
//! Parses `ci2conf.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [[site]]
//! name = "main"
//! url = "https://confluence.example.com"
//! username = "ci-bot"
//! password = "${CONFLUENCE_TOKEN}"
//!
//! [publish]
//! site = "main"
//! space = "DOCS"
//! page = "Release Builds"
//! attach_archived_artifacts = true
//! file_set = "target/*.jar"
//!
//! [[publish.editor]]
//! kind = "replace-token"
//! token = "{{VERSION}}"
//! markup = "${BUILD_NUMBER}"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! Site credential values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `site.username`
//! - `site.password`
//!
//! Build-environment templates (`publish.comment`, `publish.file_set`,
//! editor markup) are not expanded at load time; they expand per build
//! against the build environment.

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use ci2conf_core::{MarkupEditor, MarkupGenerator, PublishSettings};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the target site name.
    pub site: Option<String>,
    /// Override the target space key.
    pub space: Option<String>,
    /// Override the target page title.
    pub page: Option<String>,
    /// Override the workspace file patterns.
    pub file_set: Option<String>,
    /// Override the edit comment template.
    pub comment: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "ci2conf.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configured wiki sites.
    #[serde(rename = "site")]
    sites: Vec<SiteConfig>,
    /// Publish target and editors.
    publish: PublishSection,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// One named wiki site.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site name, referenced by `publish.site`.
    pub name: String,
    /// Site base URL.
    pub url: String,
    /// Account username.
    pub username: String,
    /// Account password or API token.
    pub password: String,
}

/// Raw `[publish]` section as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PublishSection {
    site: Option<String>,
    space: Option<String>,
    page: Option<String>,
    attach_archived_artifacts: Option<bool>,
    file_set: Option<String>,
    comment: Option<String>,
    #[serde(rename = "editor")]
    editors: Vec<EditorRecord>,
}

/// Raw `[[publish.editor]]` entry as parsed from TOML.
#[derive(Debug, Deserialize)]
struct EditorRecord {
    kind: String,
    token: Option<String>,
    start_token: Option<String>,
    end_token: Option<String>,
    markup: Option<String>,
    markup_file: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.main.password`").
        field: String,
        /// Error message (e.g., "${`CONFLUENCE_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ci2conf.toml` in current directory and
    /// parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no config file exists, and
    /// parse, expansion or validation errors from loading one.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            return Err(ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)));
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(site) = &settings.site {
            self.publish.site = Some(site.clone());
        }
        if let Some(space) = &settings.space {
            self.publish.space = Some(space.clone());
        }
        if let Some(page) = &settings.page {
            self.publish.page = Some(page.clone());
        }
        if let Some(file_set) = &settings.file_set {
            self.publish.file_set = Some(file_set.clone());
        }
        if let Some(comment) = &settings.comment {
            self.publish.comment = Some(comment.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Expand environment variable references in site credentials.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for site in &mut self.sites {
            let name = site.name.clone();
            site.url = expand::expand_env(&site.url, &format!("site.{name}.url"))?;
            site.username = expand::expand_env(&site.username, &format!("site.{name}.username"))?;
            site.password = expand::expand_env(&site.password, &format!("site.{name}.password"))?;
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks the `[[site]]` entries; the publish target is validated
    /// lazily by [`Config::publish_settings`] since the CLI may still
    /// override it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for site in &self.sites {
            require_non_empty(&site.name, "site.name")?;
            let name = &site.name;
            require_non_empty(&site.url, &format!("site.{name}.url"))?;
            require_http_url(&site.url, &format!("site.{name}.url"))?;
            require_non_empty(&site.username, &format!("site.{name}.username"))?;
            require_non_empty(&site.password, &format!("site.{name}.password"))?;
            if !names.insert(name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate site name '{name}'"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the site to publish to.
    ///
    /// Uses the site named by `publish.site` when set, otherwise the first
    /// configured site.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` when no sites are configured or
    /// the named site does not exist.
    pub fn resolve_site(&self) -> Result<&SiteConfig, ConfigError> {
        if self.sites.is_empty() {
            return Err(ConfigError::Validation(
                "no [[site]] entries configured".to_owned(),
            ));
        }
        match &self.publish.site {
            Some(name) => self
                .sites
                .iter()
                .find(|s| &s.name == name)
                .ok_or_else(|| ConfigError::Validation(format!("site '{name}' is not configured"))),
            None => Ok(&self.sites[0]),
        }
    }

    /// Build the publish settings from the `[publish]` section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` when the target space or page is
    /// missing, or an editor entry is malformed.
    pub fn publish_settings(&self) -> Result<PublishSettings, ConfigError> {
        let space = self.publish.space.as_deref().unwrap_or_default();
        require_non_empty(space, "publish.space")?;
        let page = self.publish.page.as_deref().unwrap_or_default();
        require_non_empty(page, "publish.page")?;

        let mut settings = PublishSettings::new(space, page);
        settings.attach_archived_artifacts =
            self.publish.attach_archived_artifacts.unwrap_or(false);
        settings.file_set = self
            .publish
            .file_set
            .as_ref()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty());
        if let Some(comment) = &self.publish.comment {
            settings.edit_comment.clone_from(comment);
        }
        settings.editors = self
            .publish
            .editors
            .iter()
            .enumerate()
            .map(|(index, record)| build_editor(record, index))
            .collect::<Result<_, _>>()?;

        Ok(settings)
    }
}

/// Build one markup editor from its raw TOML record.
fn build_editor(record: &EditorRecord, index: usize) -> Result<MarkupEditor, ConfigError> {
    let field = format!("publish.editor[{index}]");

    let generator = match (&record.markup, &record.markup_file) {
        (Some(markup), None) => MarkupGenerator::Text {
            markup: markup.clone(),
        },
        (None, Some(path)) => MarkupGenerator::File { path: path.clone() },
        (Some(_), Some(_)) => {
            return Err(ConfigError::Validation(format!(
                "{field} cannot set both markup and markup_file"
            )));
        }
        (None, None) => {
            return Err(ConfigError::Validation(format!(
                "{field} requires either markup or markup_file"
            )));
        }
    };

    let require_token = |name: &str, value: &Option<String>| -> Result<String, ConfigError> {
        match value.as_deref() {
            Some(token) if !token.is_empty() => Ok(token.to_owned()),
            _ => Err(ConfigError::Validation(format!(
                "{field}.{name} is required for kind '{}'",
                record.kind
            ))),
        }
    };

    Ok(match record.kind.as_str() {
        "prepend" => MarkupEditor::Prepend { generator },
        "append" => MarkupEditor::Append { generator },
        "before-token" => MarkupEditor::BeforeToken {
            generator,
            token: require_token("token", &record.token)?,
        },
        "after-token" => MarkupEditor::AfterToken {
            generator,
            token: require_token("token", &record.token)?,
        },
        "between-tokens" => MarkupEditor::BetweenTokens {
            generator,
            start_token: require_token("start_token", &record.start_token)?,
            end_token: require_token("end_token", &record.end_token)?,
        },
        "replace-token" => MarkupEditor::ReplaceToken {
            generator,
            token: require_token("token", &record.token)?,
        },
        "entire-page" => MarkupEditor::EntirePage { generator },
        other => {
            return Err(ConfigError::Validation(format!(
                "{field}.kind '{other}' is not recognized \
                 (expected prepend, append, before-token, after-token, \
                 between-tokens, replace-token or entire-page)"
            )));
        }
    })
}

#[cfg(test)]
mod tests {
    use ci2conf_core::DEFAULT_EDIT_COMMENT;
    use pretty_assertions::assert_eq;

    use super::*;

    const MINIMAL: &str = r#"
[[site]]
name = "main"
url = "https://confluence.example.com"
username = "ci-bot"
password = "hunter2"

[publish]
space = "DOCS"
page = "Release Builds"
"#;

    fn parse(toml: &str) -> Config {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse(MINIMAL);

        assert_eq!(config.sites.len(), 1);
        assert_eq!(config.sites[0].name, "main");
        assert_eq!(config.sites[0].url, "https://confluence.example.com");
        assert_eq!(config.publish.space.as_deref(), Some("DOCS"));
        assert_eq!(config.publish.page.as_deref(), Some("Release Builds"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse("");

        assert!(config.sites.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_site_defaults_to_first() {
        let config = parse(
            r#"
[[site]]
name = "first"
url = "https://one.example.com"
username = "u"
password = "p"

[[site]]
name = "second"
url = "https://two.example.com"
username = "u"
password = "p"
"#,
        );

        assert_eq!(config.resolve_site().unwrap().name, "first");
    }

    #[test]
    fn test_resolve_site_by_name() {
        let config = parse(
            r#"
[[site]]
name = "first"
url = "https://one.example.com"
username = "u"
password = "p"

[[site]]
name = "second"
url = "https://two.example.com"
username = "u"
password = "p"

[publish]
site = "second"
"#,
        );

        assert_eq!(config.resolve_site().unwrap().name, "second");
    }

    #[test]
    fn test_resolve_site_unknown_name() {
        let mut config = parse(MINIMAL);
        config.publish.site = Some("elsewhere".to_owned());

        let err = config.resolve_site().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("'elsewhere'"));
    }

    #[test]
    fn test_resolve_site_none_configured() {
        let config = parse("");

        let err = config.resolve_site().unwrap_err();

        assert!(err.to_string().contains("no [[site]]"));
    }

    #[test]
    fn test_validate_duplicate_site_names() {
        let config = parse(
            r#"
[[site]]
name = "main"
url = "https://one.example.com"
username = "u"
password = "p"

[[site]]
name = "main"
url = "https://two.example.com"
username = "u"
password = "p"
"#,
        );

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("duplicate site name 'main'"));
    }

    #[test]
    fn test_validate_empty_username() {
        let mut config = parse(MINIMAL);
        config.sites[0].username = String::new();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("site.main.username"));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_validate_url_scheme() {
        let mut config = parse(MINIMAL);
        config.sites[0].url = "confluence.example.com".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("site.main.url"));
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_expand_env_vars_password() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CI2CONF_TEST_PASSWORD", "s3cret");
        }

        let mut config = parse(
            r#"
[[site]]
name = "main"
url = "https://confluence.example.com"
username = "ci-bot"
password = "${CI2CONF_TEST_PASSWORD}"
"#,
        );
        config.expand_env_vars().unwrap();

        assert_eq!(config.sites[0].password, "s3cret");

        unsafe {
            std::env::remove_var("CI2CONF_TEST_PASSWORD");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CI2CONF_MISSING_CONFIG_VAR");
        }

        let mut config = parse(
            r#"
[[site]]
name = "main"
url = "https://confluence.example.com"
username = "ci-bot"
password = "${CI2CONF_MISSING_CONFIG_VAR}"
"#,
        );
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("site.main.password"));
        assert!(err.to_string().contains("CI2CONF_MISSING_CONFIG_VAR"));
    }

    #[test]
    fn test_publish_settings_minimal() {
        let settings = parse(MINIMAL).publish_settings().unwrap();

        assert_eq!(settings.space, "DOCS");
        assert_eq!(settings.page, "Release Builds");
        assert!(!settings.attach_archived_artifacts);
        assert_eq!(settings.file_set, None);
        assert_eq!(settings.edit_comment, DEFAULT_EDIT_COMMENT);
        assert!(settings.editors.is_empty());
    }

    #[test]
    fn test_publish_settings_full() {
        let settings = parse(
            r#"
[[site]]
name = "main"
url = "https://confluence.example.com"
username = "u"
password = "p"

[publish]
space = "DOCS"
page = "Builds"
attach_archived_artifacts = true
file_set = " target/*.jar, *.log "
comment = "Build ${BUILD_NUMBER}"
"#,
        )
        .publish_settings()
        .unwrap();

        assert!(settings.attach_archived_artifacts);
        assert_eq!(settings.file_set.as_deref(), Some("target/*.jar, *.log"));
        assert_eq!(settings.edit_comment, "Build ${BUILD_NUMBER}");
    }

    #[test]
    fn test_publish_settings_blank_file_set_dropped() {
        let mut config = parse(MINIMAL);
        config.publish.file_set = Some("   ".to_owned());

        let settings = config.publish_settings().unwrap();

        assert_eq!(settings.file_set, None);
    }

    #[test]
    fn test_publish_settings_requires_space_and_page() {
        let config = parse(
            r#"
[[site]]
name = "main"
url = "https://confluence.example.com"
username = "u"
password = "p"
"#,
        );

        let err = config.publish_settings().unwrap_err();

        assert!(err.to_string().contains("publish.space"));
    }

    #[test]
    fn test_publish_settings_builds_each_editor_kind() {
        let settings = parse(
            r#"
[[site]]
name = "main"
url = "https://confluence.example.com"
username = "u"
password = "p"

[publish]
space = "DOCS"
page = "Builds"

[[publish.editor]]
kind = "prepend"
markup = "<p>header</p>"

[[publish.editor]]
kind = "append"
markup_file = "footer.html"

[[publish.editor]]
kind = "before-token"
token = "ANCHOR"
markup = "x"

[[publish.editor]]
kind = "after-token"
token = "ANCHOR"
markup = "x"

[[publish.editor]]
kind = "between-tokens"
start_token = "<!-- start -->"
end_token = "<!-- end -->"
markup = "x"

[[publish.editor]]
kind = "replace-token"
token = "{{VERSION}}"
markup = "${BUILD_NUMBER}"

[[publish.editor]]
kind = "entire-page"
markup = "x"
"#,
        )
        .publish_settings()
        .unwrap();

        let kinds: Vec<&str> = settings.editors.iter().map(MarkupEditor::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "prepend",
                "append",
                "before-token",
                "after-token",
                "between-tokens",
                "replace-token",
                "entire-page"
            ]
        );
        assert_eq!(
            settings.editors[1],
            MarkupEditor::Append {
                generator: MarkupGenerator::File {
                    path: "footer.html".to_owned()
                }
            }
        );
        assert_eq!(
            settings.editors[5],
            MarkupEditor::ReplaceToken {
                generator: MarkupGenerator::Text {
                    markup: "${BUILD_NUMBER}".to_owned()
                },
                token: "{{VERSION}}".to_owned()
            }
        );
    }

    #[test]
    fn test_editor_requires_generator() {
        let record = EditorRecord {
            kind: "prepend".to_owned(),
            token: None,
            start_token: None,
            end_token: None,
            markup: None,
            markup_file: None,
        };

        let err = build_editor(&record, 0).unwrap_err();

        assert!(err.to_string().contains("publish.editor[0]"));
        assert!(err.to_string().contains("markup or markup_file"));
    }

    #[test]
    fn test_editor_rejects_both_generators() {
        let record = EditorRecord {
            kind: "prepend".to_owned(),
            token: None,
            start_token: None,
            end_token: None,
            markup: Some("a".to_owned()),
            markup_file: Some("b".to_owned()),
        };

        let err = build_editor(&record, 2).unwrap_err();

        assert!(err.to_string().contains("publish.editor[2]"));
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn test_editor_requires_token_for_token_kinds() {
        let record = EditorRecord {
            kind: "replace-token".to_owned(),
            token: None,
            start_token: None,
            end_token: None,
            markup: Some("x".to_owned()),
            markup_file: None,
        };

        let err = build_editor(&record, 1).unwrap_err();

        assert!(err.to_string().contains("publish.editor[1].token"));
        assert!(err.to_string().contains("replace-token"));
    }

    #[test]
    fn test_editor_requires_both_between_tokens() {
        let record = EditorRecord {
            kind: "between-tokens".to_owned(),
            token: None,
            start_token: Some("s".to_owned()),
            end_token: None,
            markup: Some("x".to_owned()),
            markup_file: None,
        };

        let err = build_editor(&record, 0).unwrap_err();

        assert!(err.to_string().contains("end_token"));
    }

    #[test]
    fn test_editor_unknown_kind() {
        let record = EditorRecord {
            kind: "uppercase".to_owned(),
            token: None,
            start_token: None,
            end_token: None,
            markup: Some("x".to_owned()),
            markup_file: None,
        };

        let err = build_editor(&record, 0).unwrap_err();

        assert!(err.to_string().contains("'uppercase'"));
        assert!(err.to_string().contains("not recognized"));
    }

    #[test]
    fn test_apply_cli_settings_overrides() {
        let mut config = parse(MINIMAL);

        config.apply_cli_settings(&CliSettings {
            site: Some("other".to_owned()),
            space: Some("OPS".to_owned()),
            page: Some("Deploys".to_owned()),
            file_set: Some("*.log".to_owned()),
            comment: Some("deployed".to_owned()),
        });

        assert_eq!(config.publish.site.as_deref(), Some("other"));
        assert_eq!(config.publish.space.as_deref(), Some("OPS"));
        assert_eq!(config.publish.page.as_deref(), Some("Deploys"));
        assert_eq!(config.publish.file_set.as_deref(), Some("*.log"));
        assert_eq!(config.publish.comment.as_deref(), Some("deployed"));
    }

    #[test]
    fn test_apply_cli_settings_empty_keeps_config() {
        let mut config = parse(MINIMAL);

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.publish.space.as_deref(), Some("DOCS"));
        assert_eq!(config.publish.page.as_deref(), Some("Release Builds"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, MINIMAL).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.sites[0].name, "main");
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let err = Config::load(Some(Path::new("/nonexistent/ci2conf.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, MINIMAL).unwrap();

        let settings = CliSettings {
            page: Some("Nightly".to_owned()),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.publish.page.as_deref(), Some("Nightly"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[[site]\nname = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
