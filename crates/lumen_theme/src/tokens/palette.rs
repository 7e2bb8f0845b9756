//! Palette tokens: semantic color roles and surface/text colors

use crate::error::ThemeError;
use lumen_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Light or dark palette
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    #[default]
    Light,
    Dark,
}

impl PaletteMode {
    pub fn toggle(self) -> Self {
        match self {
            PaletteMode::Light => PaletteMode::Dark,
            PaletteMode::Dark => PaletteMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, PaletteMode::Dark)
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaletteMode::Light => "light",
            PaletteMode::Dark => "dark",
        })
    }
}

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRole {
    Primary,
    Secondary,
    Error,
    Warning,
    Info,
    Success,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 6] = [
        PaletteRole::Primary,
        PaletteRole::Secondary,
        PaletteRole::Error,
        PaletteRole::Warning,
        PaletteRole::Info,
        PaletteRole::Success,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteRole::Primary => "primary",
            PaletteRole::Secondary => "secondary",
            PaletteRole::Error => "error",
            PaletteRole::Warning => "warning",
            PaletteRole::Info => "info",
            PaletteRole::Success => "success",
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four tonal variants of a palette role
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

impl PaletteColor {
    pub fn new(main: Color, light: Color, dark: Color, contrast_text: Color) -> Self {
        Self {
            main,
            light,
            dark,
            contrast_text,
        }
    }

    /// The variants `palette` holds for `role`
    pub fn for_role(palette: &Palette, role: PaletteRole) -> Self {
        *palette.role(role)
    }

    /// Build a role from an override, deriving whatever the override leaves out.
    ///
    /// Fails when the override has no `main`, since nothing can be derived then.
    pub fn from_options(
        role: PaletteRole,
        options: &PaletteColorOptions,
        tonal_offset: f32,
        contrast_threshold: f32,
    ) -> Result<Self, ThemeError> {
        let main = options.main.ok_or(ThemeError::MissingMain { role })?;
        let derived = derive_variants(main, tonal_offset, contrast_threshold);
        Ok(Self {
            main,
            light: options.light.unwrap_or(derived.light),
            dark: options.dark.unwrap_or(derived.dark),
            contrast_text: options.contrast_text.unwrap_or(derived.contrast_text),
        })
    }
}

/// Colors generated from a single main color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorVariants {
    pub light: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

/// Text color used on light backgrounds
pub const DARK_TEXT: Color = Color::rgba(0.0, 0.0, 0.0, 0.87);

/// Pick white or dark text for `background`, preferring white whenever it
/// reaches `contrast_threshold`.
pub fn contrast_text_for(background: Color, contrast_threshold: f32) -> Color {
    if background.contrast_ratio(&Color::WHITE) >= contrast_threshold {
        Color::WHITE
    } else {
        DARK_TEXT
    }
}

/// Derive light, dark and contrast-text variants from a main color
pub fn derive_variants(main: Color, tonal_offset: f32, contrast_threshold: f32) -> ColorVariants {
    ColorVariants {
        light: main.lighten(tonal_offset),
        dark: main.darken(tonal_offset * 1.5),
        contrast_text: contrast_text_for(main, contrast_threshold),
    }
}

/// Partial override for one palette role
///
/// Accepts either a bare color (`primary = "#ff5722"`) or a table with any of
/// the four variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PaletteColorInput")]
pub struct PaletteColorOptions {
    pub main: Option<Color>,
    pub light: Option<Color>,
    pub dark: Option<Color>,
    pub contrast_text: Option<Color>,
}

impl PaletteColorOptions {
    pub fn main(main: Color) -> Self {
        Self {
            main: Some(main),
            ..Self::default()
        }
    }

    pub fn with_light(mut self, light: Color) -> Self {
        self.light = Some(light);
        self
    }

    pub fn with_dark(mut self, dark: Color) -> Self {
        self.dark = Some(dark);
        self
    }

    pub fn with_contrast_text(mut self, contrast_text: Color) -> Self {
        self.contrast_text = Some(contrast_text);
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteColorInput {
    Main(Color),
    Variants {
        #[serde(default)]
        main: Option<Color>,
        #[serde(default)]
        light: Option<Color>,
        #[serde(default)]
        dark: Option<Color>,
        #[serde(default)]
        contrast_text: Option<Color>,
    },
}

impl From<PaletteColorInput> for PaletteColorOptions {
    fn from(input: PaletteColorInput) -> Self {
        match input {
            PaletteColorInput::Main(main) => Self::main(main),
            PaletteColorInput::Variants {
                main,
                light,
                dark,
                contrast_text,
            } => Self {
                main,
                light,
                dark,
                contrast_text,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub default: Color,
    pub paper: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub disabled: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommonColors {
    pub black: Color,
    pub white: Color,
}

/// Complete palette for one mode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub mode: PaletteMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
    pub success: PaletteColor,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub divider: Color,
    pub common: CommonColors,
    /// Minimum contrast ratio white text needs before it is preferred
    pub contrast_threshold: f32,
    /// Shift applied when deriving light/dark variants
    pub tonal_offset: f32,
}

impl Palette {
    pub const DEFAULT_CONTRAST_THRESHOLD: f32 = 3.0;
    pub const DEFAULT_TONAL_OFFSET: f32 = 0.2;

    /// Built-in light palette
    pub fn light() -> Self {
        let white = Color::WHITE;
        Self {
            mode: PaletteMode::Light,
            primary: role(0x1976D2, 0x42A5F5, 0x1565C0, white),
            secondary: role(0x9C27B0, 0xBA68C8, 0x7B1FA2, white),
            error: role(0xD32F2F, 0xEF5350, 0xC62828, white),
            warning: role(0xED6C02, 0xFF9800, 0xE65100, white),
            info: role(0x0288D1, 0x03A9F4, 0x01579B, white),
            success: role(0x2E7D32, 0x4CAF50, 0x1B5E20, white),
            background: BackgroundColors {
                default: white,
                paper: white,
            },
            text: TextColors {
                primary: DARK_TEXT,
                secondary: Color::BLACK.with_alpha(0.6),
                disabled: Color::BLACK.with_alpha(0.38),
            },
            divider: Color::BLACK.with_alpha(0.12),
            common: CommonColors::default(),
            contrast_threshold: Self::DEFAULT_CONTRAST_THRESHOLD,
            tonal_offset: Self::DEFAULT_TONAL_OFFSET,
        }
    }

    /// Built-in dark palette
    pub fn dark() -> Self {
        let white = Color::WHITE;
        Self {
            mode: PaletteMode::Dark,
            primary: role(0x90CAF9, 0xE3F2FD, 0x42A5F5, DARK_TEXT),
            secondary: role(0xCE93D8, 0xF3E5F5, 0xAB47BC, DARK_TEXT),
            error: role(0xF44336, 0xE57373, 0xD32F2F, white),
            warning: role(0xFFA726, 0xFFB74D, 0xF57C00, DARK_TEXT),
            info: role(0x29B6F6, 0x4FC3F7, 0x0288D1, DARK_TEXT),
            success: role(0x66BB6A, 0x81C784, 0x388E3C, DARK_TEXT),
            background: BackgroundColors {
                default: Color::from_hex(0x121212),
                paper: Color::from_hex(0x121212),
            },
            text: TextColors {
                primary: white,
                secondary: white.with_alpha(0.7),
                disabled: white.with_alpha(0.5),
            },
            divider: white.with_alpha(0.12),
            common: CommonColors::default(),
            contrast_threshold: Self::DEFAULT_CONTRAST_THRESHOLD,
            tonal_offset: Self::DEFAULT_TONAL_OFFSET,
        }
    }

    pub fn for_mode(mode: PaletteMode) -> Self {
        match mode {
            PaletteMode::Light => Self::light(),
            PaletteMode::Dark => Self::dark(),
        }
    }

    /// Get a role by key
    pub fn role(&self, role: PaletteRole) -> &PaletteColor {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Secondary => &self.secondary,
            PaletteRole::Error => &self.error,
            PaletteRole::Warning => &self.warning,
            PaletteRole::Info => &self.info,
            PaletteRole::Success => &self.success,
        }
    }

    fn role_mut(&mut self, role: PaletteRole) -> &mut PaletteColor {
        match role {
            PaletteRole::Primary => &mut self.primary,
            PaletteRole::Secondary => &mut self.secondary,
            PaletteRole::Error => &mut self.error,
            PaletteRole::Warning => &mut self.warning,
            PaletteRole::Info => &mut self.info,
            PaletteRole::Success => &mut self.success,
        }
    }

    /// Readable text color on top of `background`
    pub fn contrast_text(&self, background: Color) -> Color {
        contrast_text_for(background, self.contrast_threshold)
    }

    /// Compose a palette from the mode's defaults and an optional override
    pub fn compose(options: Option<&PaletteOptions>) -> Result<Self, ThemeError> {
        let Some(options) = options else {
            return Ok(Self::light());
        };

        let mut palette = Self::for_mode(options.mode.unwrap_or_default());
        if let Some(threshold) = options.contrast_threshold {
            palette.contrast_threshold = threshold;
        }
        if let Some(offset) = options.tonal_offset {
            palette.tonal_offset = offset;
        }

        for role in PaletteRole::ALL {
            if let Some(role_options) = options.role(role) {
                let color = PaletteColor::from_options(
                    role,
                    role_options,
                    palette.tonal_offset,
                    palette.contrast_threshold,
                )?;
                tracing::trace!(%role, main = %color.main, "palette role overridden");
                *palette.role_mut(role) = color;
            }
        }

        if let Some(background) = &options.background {
            palette.background.default = background.default.unwrap_or(palette.background.default);
            palette.background.paper = background.paper.unwrap_or(palette.background.paper);
        }
        if let Some(text) = &options.text {
            palette.text.primary = text.primary.unwrap_or(palette.text.primary);
            palette.text.secondary = text.secondary.unwrap_or(palette.text.secondary);
            palette.text.disabled = text.disabled.unwrap_or(palette.text.disabled);
        }
        if let Some(divider) = options.divider {
            palette.divider = divider;
        }

        Ok(palette)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl Default for CommonColors {
    fn default() -> Self {
        Self {
            black: Color::BLACK,
            white: Color::WHITE,
        }
    }
}

fn role(main: u32, light: u32, dark: u32, contrast_text: Color) -> PaletteColor {
    PaletteColor::new(
        Color::from_hex(main),
        Color::from_hex(light),
        Color::from_hex(dark),
        contrast_text,
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundOptions {
    pub default: Option<Color>,
    pub paper: Option<Color>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub disabled: Option<Color>,
}

/// Partial palette override
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    pub mode: Option<PaletteMode>,
    pub primary: Option<PaletteColorOptions>,
    pub secondary: Option<PaletteColorOptions>,
    pub error: Option<PaletteColorOptions>,
    pub warning: Option<PaletteColorOptions>,
    pub info: Option<PaletteColorOptions>,
    pub success: Option<PaletteColorOptions>,
    pub background: Option<BackgroundOptions>,
    pub text: Option<TextOptions>,
    pub divider: Option<Color>,
    pub contrast_threshold: Option<f32>,
    pub tonal_offset: Option<f32>,
}

impl PaletteOptions {
    pub fn role(&self, role: PaletteRole) -> Option<&PaletteColorOptions> {
        match role {
            PaletteRole::Primary => self.primary.as_ref(),
            PaletteRole::Secondary => self.secondary.as_ref(),
            PaletteRole::Error => self.error.as_ref(),
            PaletteRole::Warning => self.warning.as_ref(),
            PaletteRole::Info => self.info.as_ref(),
            PaletteRole::Success => self.success.as_ref(),
        }
    }
}
