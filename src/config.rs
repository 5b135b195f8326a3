use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".locale-extract.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_output() -> String {
    "locale/en.json".to_string()
}

fn default_extension() -> String {
    "rs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output: default_output(),
            extension: default_extension(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the extension is empty or an ignore pattern is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            anyhow::bail!("'extension' must not be empty");
        }
        self.ignore_patterns()?;
        Ok(())
    }

    /// File extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Load `.locale-extract.json` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<ConfigLoadResult> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;

    Ok(ConfigLoadResult {
        config,
        from_file: true,
    })
}
