use crate::rules::{RewriteRule, RuleSet};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Historical fixed target: the extracted UI component directory,
/// resolved against the current working directory.
pub const DEFAULT_TARGET_DIR: &str = "packages/ui/src/components/ui";
pub const DEFAULT_EXTENSION: &str = "tsx";
const DEFAULT_CONFIG_FILE: &str = "rewriter.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target_dir: PathBuf,
    pub extension: String,
    pub rules: RuleSet,
}

// --- Raw TOML structures ---
#[derive(Deserialize)]
struct ConfigToml {
    target_dir: Option<String>,
    extension: Option<String>,
    rules: Option<Vec<RuleToml>>,
}

#[derive(Deserialize)]
struct RuleToml {
    pattern: String,
    replacement: String,
}

impl AppConfig {
    /// Load configuration. An explicitly given path must exist; the default
    /// `rewriter.toml` is optional so the bare no-argument invocation keeps
    /// working against the historical fixed directory.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let raw = match config_path {
            Some(p) => {
                let content = fs::read_to_string(p)
                    .with_context(|| format!("failed to read {}", p.display()))?;
                Some(Self::parse(&content, p)?)
            }
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if p.exists() {
                    let content = fs::read_to_string(p)
                        .with_context(|| format!("failed to read {}", p.display()))?;
                    Some(Self::parse(&content, p)?)
                } else {
                    None
                }
            }
        };

        let raw = raw.unwrap_or(ConfigToml {
            target_dir: None,
            extension: None,
            rules: None,
        });

        let target_dir = raw
            .target_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR));
        let extension = raw
            .extension
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        let rules = match raw.rules {
            Some(entries) => {
                let mut rules = Vec::with_capacity(entries.len());
                for entry in entries {
                    rules.push(RewriteRule::new(&entry.pattern, &entry.replacement)?);
                }
                RuleSet::new(rules)
            }
            None => RuleSet::default_rules(),
        };

        Ok(Self {
            target_dir,
            extension,
            rules,
        })
    }

    fn parse(content: &str, path: &Path) -> Result<ConfigToml> {
        toml::from_str(content).with_context(|| format!("failed to parse {}", path.display()))
    }
}
