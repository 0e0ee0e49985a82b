//! Collects the files a build wants attached to the wiki page.
//!
//! Two sources feed the upload list: the build's archived-artifacts
//! directory, walked recursively, and an optional comma-separated list of
//! glob patterns evaluated against the workspace. Archived artifacts come
//! first; a file matched by both sources is listed once.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::build::BuildContext;

/// Collect the files to attach for one build.
///
/// Collection never fails: unreadable directories, invalid patterns and
/// patterns that match nothing are logged and skipped, and the remaining
/// sources still contribute.
#[must_use]
pub fn collect_artifacts(
    context: &BuildContext,
    attach_archived_artifacts: bool,
    file_set: Option<&str>,
) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    if attach_archived_artifacts {
        if let Some(dir) = &context.artifacts_dir {
            let mut archived = Vec::new();
            walk_files(dir, &mut archived);
            tracing::info!(count = archived.len(), "Found archived artifacts");
            for path in archived {
                if seen.insert(identity_key(&path)) {
                    files.push(path);
                }
            }
        } else {
            tracing::info!("Build has no archived artifacts directory");
        }
    }

    if let Some(pattern_list) = file_set {
        let pattern_list = context.expand(pattern_list);
        // The workspace is walked at most once, even for multiple patterns.
        let mut workspace_files: Option<Vec<PathBuf>> = None;

        for pattern in pattern_list.split(',') {
            let pattern = pattern.trim();
            if pattern.is_empty() {
                continue;
            }

            let compiled = match Pattern::new(pattern) {
                Ok(compiled) => compiled,
                Err(err) => {
                    tracing::warn!(pattern, error = %err, "Ignoring invalid file pattern");
                    continue;
                }
            };

            let candidates = workspace_files.get_or_insert_with(|| {
                let mut all = Vec::new();
                walk_files(&context.workspace, &mut all);
                all
            });

            let mut matched = 0usize;
            for path in &*candidates {
                let relative = path.strip_prefix(&context.workspace).unwrap_or(path);
                if compiled.matches_path(relative) {
                    matched += 1;
                    if seen.insert(identity_key(path)) {
                        files.push(path.clone());
                    }
                }
            }

            if matched == 0 {
                tracing::info!(pattern, "No files matched the pattern");
            }
        }
    }

    files
}

/// Recursively collect every regular file below `dir`.
///
/// Unreadable directories are logged and skipped.
fn walk_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "Cannot read directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_files(&path, files);
        } else {
            files.push(path);
        }
    }
}

/// Key used to deduplicate files across the two sources.
///
/// Canonicalization folds symlinks and relative segments so that the same
/// file reached via different paths counts once; files that cannot be
/// canonicalized fall back to their literal path.
fn identity_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
