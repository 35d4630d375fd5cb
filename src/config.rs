use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locsyncrc.json";

/// Path of intermediate keys leading to the group of translations that
/// is synchronized between locales.
pub const GROUP_PATH: &[&str] = &["concrete", "byVolume"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    #[serde(default = "default_locale_file")]
    pub locale_file: String,
    #[serde(default = "default_target_locales")]
    pub target_locales: Vec<String>,
}

fn default_locales_root() -> String {
    "src/locales".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_locale_file() -> String {
    "calculation.json".to_string()
}

fn default_target_locales() -> Vec<String> {
    [
        "as", "bn", "bho", "gu", "hi", "hry", "kn", "ml", "mr", "raj", "ta", "te", "ur",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            reference_locale: default_reference_locale(),
            locale_file: default_locale_file(),
            target_locales: default_target_locales(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.locale_file.is_empty() {
            bail!("'localeFile' must not be empty");
        }
        if self.reference_locale.is_empty() {
            bail!("'referenceLocale' must not be empty");
        }
        if self.target_locales.contains(&self.reference_locale) {
            bail!(
                "'targetLocales' must not contain the reference locale \"{}\"",
                self.reference_locale
            );
        }
        Ok(())
    }
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
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
