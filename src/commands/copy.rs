use crate::config::AppConfig;
use crate::copy::copy_directory;
use crate::rewrite::FileOutcome;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Execute the copy command: copy component files from a source tree into the
/// target directory, rewriting imports on the way.
pub fn copy(config: Option<&str>, from: &str, dir: Option<&str>) -> Result<()> {
    let cfg = AppConfig::load(config.map(Path::new)).context("failed to load config")?;
    let source = PathBuf::from(from);
    let target = dir.map(PathBuf::from).unwrap_or(cfg.target_dir);

    if !source.is_dir() {
        bail!("source directory not found: {}", source.display());
    }

    let summary = copy_directory(&source, &target, &cfg.extension, &cfg.rules)
        .context("copy pass failed")?;

    for report in &summary.reports {
        match &report.outcome {
            FileOutcome::Updated => {
                let name = report.path.file_name().unwrap_or(report.path.as_os_str());
                println!("Copied: {}", name.to_string_lossy());
            }
            FileOutcome::Unchanged => {}
            FileOutcome::Failed(reason) => {
                println!("Error processing {}: {}", report.path.display(), reason);
            }
        }
    }

    println!(
        "\nCompleted: Copied {} of {} files",
        summary.updated, summary.total
    );
    Ok(())
}
