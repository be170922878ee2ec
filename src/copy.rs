use crate::rewrite::{FileOutcome, FileReport, RunSummary, discover_files};
use crate::rules::RuleSet;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Copy every matching file from `source` into `target`, applying the rewrite
/// rules on the way. Used when extracting components out of the legacy app
/// tree in one step instead of copying first and rewriting in place after.
pub fn copy_directory(
    source: &Path,
    target: &Path,
    extension: &str,
    rules: &RuleSet,
) -> Result<RunSummary> {
    let files = discover_files(source, extension)?;
    fs::create_dir_all(target)
        .with_context(|| format!("failed to create {}", target.display()))?;
    tracing::debug!(
        "copy pass: {} files, {} -> {}",
        files.len(),
        source.display(),
        target.display()
    );

    let mut summary = RunSummary::default();
    for path in files {
        let outcome = copy_file(&path, target, rules);
        summary.total += 1;
        if outcome == FileOutcome::Updated {
            summary.updated += 1;
        }
        summary.reports.push(FileReport { path, outcome });
    }
    Ok(summary)
}

fn copy_file(source: &Path, target_dir: &Path, rules: &RuleSet) -> FileOutcome {
    let Some(name) = source.file_name() else {
        return FileOutcome::Failed("source path has no file name".to_string());
    };
    let content = match fs::read_to_string(source) {
        Ok(c) => c,
        Err(e) => return FileOutcome::Failed(e.to_string()),
    };

    let rewritten = rules.apply(&content);
    match fs::write(target_dir.join(name), rewritten.as_bytes()) {
        Ok(()) => FileOutcome::Updated,
        Err(e) => FileOutcome::Failed(e.to_string()),
    }
}
