use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys a complete configuration file is expected to contain.
pub const CONFIG_KEYS: [&str; 4] = [
    "min_display_minutes",
    "pixels_per_hour",
    "default_format",
    "skip_invalid",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_min_display")]
    pub min_display_minutes: u32,
    #[serde(default = "default_pixels_per_hour")]
    pub pixels_per_hour: f64,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default)]
    pub skip_invalid: bool,
}

fn default_min_display() -> u32 {
    15
}
fn default_pixels_per_hour() -> f64 {
    60.0
}
fn default_format() -> String {
    "table".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_display_minutes: default_min_display(),
            pixels_per_hour: default_pixels_per_hour(),
            default_format: default_format(),
            skip_invalid: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rdaylayout`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rdaylayout")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdaylayout.conf")
    }

    /// Config path to use: `--config` override (with `~` expanded) or the default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.pixels_per_hour.is_finite() || self.pixels_per_hour <= 0.0 {
            return Err(AppError::Config(format!(
                "pixels_per_hour must be positive, got {}",
                self.pixels_per_hour
            )));
        }
        if self.min_display_minutes > 1440 {
            return Err(AppError::Config(format!(
                "min_display_minutes must be at most 1440, got {}",
                self.min_display_minutes
            )));
        }
        Ok(())
    }

    /// Keys from `CONFIG_KEYS` absent in the file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let missing = match yaml.as_mapping() {
            Some(map) => CONFIG_KEYS
                .iter()
                .copied()
                .filter(|k| !map.contains_key(*k))
                .collect(),
            None => CONFIG_KEYS.to_vec(),
        };
        Ok(missing)
    }

    /// Write a default configuration file at `path` (parent dirs included).
    /// In test mode nothing is written.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }
}
