use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".polycatrc.json";

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of the catalog snapshot, relative to the config file.
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Leave the default language out of translation listings.
    #[serde(default)]
    pub exclude_default: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_catalog() -> String {
    "./catalog.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            exclude_default: false,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.trim().is_empty() {
            bail!("Invalid 'catalog' in config: path must not be empty");
        }
        Ok(())
    }

    /// Catalog path, resolved against `base_dir` when relative.
    pub fn catalog_path(&self, base_dir: &Path) -> PathBuf {
        let path = Path::new(&self.catalog);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            let rel = path.strip_prefix(".").unwrap_or(path);
            base_dir.join(rel)
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
