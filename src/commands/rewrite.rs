use crate::config::AppConfig;
use crate::rewrite::{FileOutcome, rewrite_directory};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Execute the rewrite command: the in-place import rewrite pass over the
/// target directory.
pub fn rewrite(config: Option<&str>, dir: Option<&str>) -> Result<()> {
    let cfg = AppConfig::load(config.map(Path::new)).context("failed to load config")?;
    let target = dir.map(PathBuf::from).unwrap_or(cfg.target_dir);
    tracing::debug!(dir=%target.display(), ext=%cfg.extension, "rewrite start");
    if cfg.rules.is_empty() {
        tracing::warn!("no rewrite rules configured; nothing will change");
    }

    // A missing target directory is a no-op, not a process failure: the
    // extraction this tool belongs to may simply not have run yet.
    if !target.is_dir() {
        println!("Error: Directory {} does not exist", target.display());
        return Ok(());
    }

    let summary = rewrite_directory(&target, &cfg.extension, &cfg.rules)
        .context("rewrite pass failed")?;

    for report in &summary.reports {
        match &report.outcome {
            FileOutcome::Updated => {
                let name = report.path.file_name().unwrap_or(report.path.as_os_str());
                println!("Updated: {}", name.to_string_lossy());
            }
            FileOutcome::Unchanged => {}
            FileOutcome::Failed(reason) => {
                println!("Error processing {}: {}", report.path.display(), reason);
            }
        }
    }

    println!(
        "\nCompleted: Updated {} of {} files",
        summary.updated, summary.total
    );
    Ok(())
}
