use std::{env, path::PathBuf};

use anyhow::Result;
use tracing::debug;

use super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, Config, OutputFormat, load_config},
    core::CatalogSnapshot,
};

/// Everything a catalog command needs: merged configuration and the catalog.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--catalog shop.json`)
/// 2. `.polycatrc.json` config file
/// 3. Built-in defaults
pub struct CommandContext {
    pub config: Config,
    pub catalog: CatalogSnapshot,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config and catalog for a command.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Catalog file is missing or malformed
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir()?;

        let config_result = load_config(&cwd)?;
        if common_args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        let catalog_path: PathBuf = match &common_args.catalog {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => cwd.join(path),
            None => config.catalog_path(&config_result.base_dir),
        };
        let format = common_args.format.unwrap_or(config.format);

        let catalog = CatalogSnapshot::load(&catalog_path)?;
        debug!(
            path = %catalog_path.display(),
            products = catalog.product_count(),
            terms = catalog.term_count(),
            "loaded catalog"
        );

        Ok(Self {
            config,
            catalog,
            format,
        })
    }

    /// Whether the default language should be left out, from the flag or config.
    pub fn exclude_default(&self, flag: bool) -> bool {
        flag || self.config.exclude_default
    }
}
