//! Theme overrides
//!
//! `ThemeOptions` mirrors [`Theme`](crate::Theme) with every leaf optional.
//! It deserializes from TOML (or any serde format), so an application can keep
//! its overrides in configuration:
//!
//! ```toml
//! [palette]
//! mode = "dark"
//! primary = "#ff5722"
//!
//! [typography.h1]
//! font_size = "4rem"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::tokens::*;

/// Partial theme override; anything left unset falls back to the defaults
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub palette: Option<PaletteOptions>,
    pub typography: Option<TypographyOptions>,
    pub spacing: Option<SpacingOptions>,
    pub breakpoints: Option<BreakpointsOptions>,
    pub shadows: Option<ShadowsOptions>,
    pub transitions: Option<TransitionsOptions>,
    pub z_index: Option<ZIndexOptions>,
    pub shape: Option<ShapeOptions>,
    pub accessibility: Option<AccessibilityOptions>,
}

impl ThemeOptions {
    /// Options selecting `mode` and nothing else
    pub fn with_mode(mode: PaletteMode) -> Self {
        let mut options = Self::default();
        options.set_mode(mode);
        options
    }

    /// Palette mode requested by these options (light when unset)
    pub fn mode(&self) -> PaletteMode {
        self.palette
            .as_ref()
            .and_then(|p| p.mode)
            .unwrap_or_default()
    }

    pub fn set_mode(&mut self, mode: PaletteMode) {
        self.palette.get_or_insert_with(PaletteOptions::default).mode = Some(mode);
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// Read options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), mode = %options.mode(), "loaded theme options");
        Ok(options)
    }
}
