//! Lumen configuration file handling

use anyhow::{Context, Result};
use lumen_theme::ThemeOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "lumen.toml";

/// Top-level Lumen configuration (lumen.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LumenConfig {
    /// Theme overrides, same shape as `ThemeOptions`
    #[serde(default)]
    pub theme: ThemeOptions,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

/// Viewport used when a command needs a current breakpoint
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewportConfig {
    /// Logical width in pixels
    #[serde(default)]
    pub width: Option<f64>,
}

impl LumenConfig {
    /// Load configuration from a file, or from `lumen.toml` inside a directory
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_path = config_path(path);

        if !config_path.exists() {
            anyhow::bail!("No {} found at {}", CONFIG_FILE, path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load `path` when given, else `./lumen.toml` if present, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }
        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            Self::load_from(local)
        } else {
            tracing::debug!("no {} in working directory, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

fn config_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    }
}
