use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::report::theme::ColorChoice;
use crate::store::DEFAULT_OUTPUT;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub output_path: PathBuf,
    pub disk_path: PathBuf,
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            disk_path: PathBuf::from("/"),
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: String,
    pub human_bytes: bool,
    pub max_model_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: "auto".to_string(),
            human_bytes: false,
            max_model_width: 48,
        }
    }
}

impl DisplayConfig {
    pub fn color_choice(&self) -> ColorChoice {
        ColorChoice::from_config_str(&self.color)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sysnap").join("config.toml"))
}

/// A config file that exists but could not be used; defaults apply instead.
#[derive(Debug)]
pub struct ConfigWarning {
    pub path: PathBuf,
    pub reason: String,
}

pub fn load_config() -> (Config, Option<ConfigWarning>) {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => (Config::default(), None),
    }
}

/// Loads `path`, falling back to defaults. Returned warnings are logged by the
/// caller once logging is set up.
pub fn load_config_from_path(path: &Path) -> (Config, Option<ConfigWarning>) {
    let warn = |reason: String| ConfigWarning {
        path: path.to_path_buf(),
        reason,
    };
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(warn(err.to_string()))),
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => (Config::default(), None),
        Err(err) => (Config::default(), Some(warn(err.to_string()))),
    }
}
