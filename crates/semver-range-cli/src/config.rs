use anyhow::{Context, Result};
use semver_range::SatisfyOptions;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "semver-range.toml";

/// The configuration file structure (semver-range.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemverConfig {
    /// Range satisfaction defaults
    pub satisfies: SatisfiesConfig,
}

/// Defaults for range satisfaction checks
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SatisfiesConfig {
    /// Let pre-release versions satisfy ranges that don't target them
    pub include_prerelease: Option<bool>,
}

impl SemverConfig {
    /// Load configuration from semver-range.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: SemverConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }
}

/// Merge the command-line flag with the config file (the flag wins)
pub fn satisfy_options(include_prerelease: bool, config: Option<&SemverConfig>) -> SatisfyOptions {
    let from_config = config
        .and_then(|c| c.satisfies.include_prerelease)
        .unwrap_or(false);

    SatisfyOptions {
        include_prerelease: include_prerelease || from_config,
    }
}
