use crate::rules::RuleSet;
use anyhow::{Context, Result};
use glob::{Pattern, glob};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-file result of one rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one rule matched; the file was overwritten with new content.
    Updated,
    /// No rule matched; the file was not written.
    Unchanged,
    /// Read or write failed; the file counts as not-updated.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub updated: usize,
    pub total: usize,
    pub reports: Vec<FileReport>,
}

/// Rewrite one file in place. Errors are folded into the outcome so a single
/// unreadable file never aborts the directory pass.
pub fn rewrite_file(path: &Path, rules: &RuleSet) -> FileOutcome {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return FileOutcome::Failed(e.to_string()),
    };

    // Compare content, not just whether a pattern matched: a rule whose
    // replacement reproduces its match must not count as an update.
    let updated = rules.apply(&content);
    if updated.as_ref() == content.as_str() {
        return FileOutcome::Unchanged;
    }
    match fs::write(path, updated.as_ref()) {
        Ok(()) => FileOutcome::Updated,
        Err(e) => FileOutcome::Failed(e.to_string()),
    }
}

/// Collect files named `*.{extension}` directly inside `dir` (no recursion),
/// in deterministic order.
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    // Only the file name is a pattern; the directory portion is literal and
    // may itself contain glob metacharacters.
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(extension)
    );
    let mut files: Vec<PathBuf> = glob(&pattern)
        .with_context(|| format!("invalid glob pattern {}", pattern))?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Run the rewrite pass over every matching file in `dir`.
///
/// `total` counts every examined file, including failures; `updated` counts
/// only files actually overwritten. The pass is idempotent: once all patterns
/// have been substituted, a second run updates nothing.
pub fn rewrite_directory(dir: &Path, extension: &str, rules: &RuleSet) -> Result<RunSummary> {
    let files = discover_files(dir, extension)?;
    tracing::debug!(
        "rewrite pass: {} files, {} rules, dir={}",
        files.len(),
        rules.len(),
        dir.display()
    );

    let mut summary = RunSummary::default();
    for path in files {
        let outcome = rewrite_file(&path, rules);
        tracing::trace!(path=%path.display(), ?outcome, "processed");
        summary.total += 1;
        if outcome == FileOutcome::Updated {
            summary.updated += 1;
        }
        summary.reports.push(FileReport { path, outcome });
    }
    Ok(summary)
}
