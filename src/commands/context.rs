use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::cli::CommonArgs;
use crate::config::{Config, load_config};

/// Resolved settings for one command run: config file values with CLI
/// overrides applied.
pub struct RunContext {
    pub config: Config,
    pub locales_root: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
}

impl RunContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir()?;
        let mut config = load_config(&cwd)?.config;

        if let Some(reference_locale) = &common.reference_locale {
            config.reference_locale = reference_locale.clone();
            // Overrides must honor the same invariants as file values
            config.validate()?;
        }
        let locales_root = common
            .locales_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.locales_root));

        Ok(Self {
            config,
            locales_root,
            dry_run: common.dry_run,
            verbose: common.verbose,
        })
    }

    /// Path of one locale's file, e.g. `src/locales/hi/calculation.json`.
    pub fn locale_file_path(&self, locale: &str) -> PathBuf {
        self.locales_root.join(locale).join(&self.config.locale_file)
    }

    /// Path of the reference locale's file.
    pub fn reference_path(&self) -> PathBuf {
        self.locale_file_path(&self.config.reference_locale)
    }
}
