//! Markup editors applied to page content during publish.
//!
//! Editors form an ordered pipeline: each consumes the current page text and
//! produces replacement text, and later editors see the output of earlier
//! ones. A failing editor (anchor token absent, markup file unreadable) is
//! skipped and the content passes through unchanged; the pipeline never
//! aborts early.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::build::BuildContext;

/// Source of the markup an editor inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupGenerator {
    /// Literal markup, environment-variable-expanded against the build.
    Text {
        /// Markup template.
        markup: String,
    },
    /// Markup read from a workspace file.
    ///
    /// The path is environment-variable-expanded and resolved relative to
    /// the build workspace unless absolute.
    File {
        /// Path template.
        path: String,
    },
}

impl MarkupGenerator {
    /// Produce the markup for one build.
    pub fn generate(&self, context: &BuildContext) -> Result<String, EditError> {
        match self {
            Self::Text { markup } => Ok(context.expand(markup)),
            Self::File { path } => {
                let expanded = context.expand(path);
                let resolved = context.workspace.join(&expanded);
                fs::read_to_string(&resolved).map_err(|source| EditError::MarkupFile {
                    path: resolved,
                    source,
                })
            }
        }
    }
}

/// One configured text transformation.
///
/// Every variant carries a [`MarkupGenerator`] producing the text to insert;
/// the variant decides where it lands in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEditor {
    /// Insert markup at the very start of the page.
    Prepend {
        /// Markup source.
        generator: MarkupGenerator,
    },
    /// Insert markup at the very end of the page.
    Append {
        /// Markup source.
        generator: MarkupGenerator,
    },
    /// Insert markup immediately before the first occurrence of a token.
    BeforeToken {
        /// Markup source.
        generator: MarkupGenerator,
        /// Anchor token.
        token: String,
    },
    /// Insert markup immediately after the first occurrence of a token.
    AfterToken {
        /// Markup source.
        generator: MarkupGenerator,
        /// Anchor token.
        token: String,
    },
    /// Replace everything between a start and an end token, keeping both
    /// tokens in place.
    BetweenTokens {
        /// Markup source.
        generator: MarkupGenerator,
        /// Opening anchor.
        start_token: String,
        /// Closing anchor, searched after the opening anchor.
        end_token: String,
    },
    /// Replace every occurrence of a token with the markup.
    ReplaceToken {
        /// Markup source.
        generator: MarkupGenerator,
        /// Token to replace.
        token: String,
    },
    /// Discard the current content entirely in favor of the markup.
    EntirePage {
        /// Markup source.
        generator: MarkupGenerator,
    },
}

/// Error from a single editor.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The editor's anchor token does not occur in the page content.
    #[error("token '{token}' not found in page content")]
    TokenNotFound {
        /// The missing token.
        token: String,
    },
    /// The markup file could not be read.
    #[error("cannot read markup file '{}': {source}", path.display())]
    MarkupFile {
        /// Resolved path of the markup file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl MarkupEditor {
    /// Configuration tag naming this editor kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Prepend { .. } => "prepend",
            Self::Append { .. } => "append",
            Self::BeforeToken { .. } => "before-token",
            Self::AfterToken { .. } => "after-token",
            Self::BetweenTokens { .. } => "between-tokens",
            Self::ReplaceToken { .. } => "replace-token",
            Self::EntirePage { .. } => "entire-page",
        }
    }

    fn generator(&self) -> &MarkupGenerator {
        match self {
            Self::Prepend { generator }
            | Self::Append { generator }
            | Self::BeforeToken { generator, .. }
            | Self::AfterToken { generator, .. }
            | Self::BetweenTokens { generator, .. }
            | Self::ReplaceToken { generator, .. }
            | Self::EntirePage { generator } => generator,
        }
    }

    /// Apply this editor to the given page content.
    ///
    /// Returns the transformed content, or an error when the anchor token
    /// is absent or the markup cannot be generated. The input content is
    /// never modified in place.
    pub fn perform_replacement(
        &self,
        context: &BuildContext,
        content: &str,
    ) -> Result<String, EditError> {
        let markup = self.generator().generate(context)?;

        match self {
            Self::Prepend { .. } => Ok(format!("{markup}\n{content}")),
            Self::Append { .. } => Ok(format!("{content}\n{markup}")),
            Self::BeforeToken { token, .. } => {
                let at = find_token(content, token)?;
                Ok(format!("{}{}{}", &content[..at], markup, &content[at..]))
            }
            Self::AfterToken { token, .. } => {
                let at = find_token(content, token)? + token.len();
                Ok(format!("{}{}{}", &content[..at], markup, &content[at..]))
            }
            Self::BetweenTokens {
                start_token,
                end_token,
                ..
            } => {
                let interior_start = find_token(content, start_token)? + start_token.len();
                let interior_end =
                    interior_start + find_token(&content[interior_start..], end_token)?;
                Ok(format!(
                    "{}{}{}",
                    &content[..interior_start],
                    markup,
                    &content[interior_end..]
                ))
            }
            Self::ReplaceToken { token, .. } => {
                find_token(content, token)?;
                Ok(content.replace(token.as_str(), &markup))
            }
            Self::EntirePage { .. } => Ok(markup),
        }
    }
}

fn find_token(content: &str, token: &str) -> Result<usize, EditError> {
    content.find(token).ok_or_else(|| EditError::TokenNotFound {
        token: token.to_owned(),
    })
}

/// Result of running a full editor pipeline.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Final page content after all editors ran.
    pub content: String,
    /// Number of editors that applied successfully.
    pub applied: usize,
    /// One line per skipped editor, naming the kind and the failure.
    pub skipped: Vec<String>,
}

/// Apply editors in order, feeding each editor's output to the next.
///
/// A failing editor is logged and skipped; its input passes through to the
/// next editor unchanged. With zero editors the content is returned as-is.
#[must_use]
pub fn apply_pipeline(
    editors: &[MarkupEditor],
    context: &BuildContext,
    content: &str,
) -> PipelineOutcome {
    let mut current = content.to_owned();
    let mut applied = 0;
    let mut skipped = Vec::new();

    for editor in editors {
        match editor.perform_replacement(context, &current) {
            Ok(next) => {
                tracing::debug!(editor = editor.kind(), "Applied markup editor");
                current = next;
                applied += 1;
            }
            Err(err) => {
                tracing::warn!(editor = editor.kind(), error = %err, "Skipping markup editor");
                skipped.push(format!("{}: {err}", editor.kind()));
            }
        }
    }

    PipelineOutcome {
        content: current,
        applied,
        skipped,
    }
}
