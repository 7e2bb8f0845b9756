//! Color types and utilities
//!
//! Colors are stored as sRGB channels in `0.0..=1.0`. They parse from and
//! format to the CSS notations the theme layer deals in (`#rrggbb`,
//! `rgba(r, g, b, a)`), which is also their serialized form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RGBA color (sRGB space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from a 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Convert to u8 array [r, g, b, a], rounding each channel
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Move each color channel towards white by `coefficient` (0.0 - 1.0)
    pub fn lighten(self, coefficient: f32) -> Self {
        let k = coefficient.clamp(0.0, 1.0);
        Self {
            r: self.r + (1.0 - self.r) * k,
            g: self.g + (1.0 - self.g) * k,
            b: self.b + (1.0 - self.b) * k,
            a: self.a,
        }
    }

    /// Move each color channel towards black by `coefficient` (0.0 - 1.0)
    pub fn darken(self, coefficient: f32) -> Self {
        let k = coefficient.clamp(0.0, 1.0);
        Self {
            r: self.r * (1.0 - k),
            g: self.g * (1.0 - k),
            b: self.b * (1.0 - k),
            a: self.a,
        }
    }

    /// WCAG relative luminance, ignoring alpha
    pub fn relative_luminance(&self) -> f32 {
        fn linear(c: f32) -> f32 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// WCAG contrast ratio between two colors, in `1.0..=21.0`
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    /// `#rrggbb` for opaque colors, `rgba(r, g, b, a)` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        if self.is_opaque() {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {})", self.a.clamp(0.0, 1.0))
        }
    }
}

/// Error returned when a CSS color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    #[error("invalid color function `{0}`")]
    InvalidFunction(String),

    #[error("color channel `{value}` out of range in `{input}`")]
    ChannelOutOfRange { input: String, value: String },

    #[error("unsupported color format `{0}`")]
    Unsupported(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
        }

        let lower = input.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
            return parse_rgb_function(input, args);
        }

        match lower.as_str() {
            "white" => Ok(Color::WHITE),
            "black" => Ok(Color::BLACK),
            "transparent" => Ok(Color::TRANSPARENT),
            _ => Err(ColorParseError::Unsupported(input.to_string())),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn function_args<'a>(lower: &'a str, name: &str) -> Option<&'a str> {
    lower
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_function(input: &str, args: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorParseError::InvalidFunction(input.to_string()));
    }

    let mut channels = [0.0f32; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: f32 = part
            .parse()
            .map_err(|_| ColorParseError::InvalidFunction(input.to_string()))?;
        if !(0.0..=255.0).contains(&value) {
            return Err(ColorParseError::ChannelOutOfRange {
                input: input.to_string(),
                value: part.to_string(),
            });
        }
        *slot = value / 255.0;
    }

    let alpha = match parts.get(3) {
        Some(part) => {
            let value: f32 = part
                .parse()
                .map_err(|_| ColorParseError::InvalidFunction(input.to_string()))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorParseError::ChannelOutOfRange {
                    input: input.to_string(),
                    value: part.to_string(),
                });
            }
            value
        }
        None => 1.0,
    };

    Ok(Color::rgba(channels[0], channels[1], channels[2], alpha))
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#1976d2".parse::<Color>().unwrap(), Color::from_hex(0x1976D2));
        assert_eq!("#1976D2".parse::<Color>().unwrap(), Color::from_hex(0x1976D2));
        let translucent: Color = "#00000080".parse().unwrap();
        assert_eq!(translucent.to_rgba8(), [0, 0, 0, 128]);
    }

    #[test]
    fn parses_rgb_functions() {
        let c: Color = "rgba(0, 0, 0, 0.87)".parse().unwrap();
        assert_eq!(c, Color::BLACK.with_alpha(0.87));
        let c: Color = "rgb(255,255,255)".parse().unwrap();
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert!(matches!("#12".parse::<Color>(), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!("#gggggg".parse::<Color>(), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(
            "rgb(300, 0, 0)".parse::<Color>(),
            Err(ColorParseError::ChannelOutOfRange { .. })
        ));
        assert!(matches!("rgb(1, 2)".parse::<Color>(), Err(ColorParseError::InvalidFunction(_))));
        assert!(matches!("hsl(0, 0%, 0%)".parse::<Color>(), Err(ColorParseError::Unsupported(_))));
    }

    #[test]
    fn formats_as_css() {
        assert_eq!(Color::from_hex(0x90CAF9).to_string(), "#90caf9");
        assert_eq!(Color::BLACK.with_alpha(0.87).to_string(), "rgba(0, 0, 0, 0.87)");
    }

    #[test]
    fn lighten_and_darken_move_towards_extremes() {
        let c = Color::from_hex(0x808080);
        assert!(c.lighten(0.2).r > c.r);
        assert!(c.darken(0.3).r < c.r);
        assert_eq!(Color::WHITE.lighten(0.5), Color::WHITE);
        assert_eq!(Color::BLACK.darken(0.5), Color::BLACK);
    }

    #[test]
    fn contrast_ratio_bounds() {
        let max = Color::WHITE.contrast_ratio(&Color::BLACK);
        assert!((max - 21.0).abs() < 0.01);
        let same = Color::WHITE.contrast_ratio(&Color::WHITE);
        assert!((same - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Color::from_hex(0xFF5722)).unwrap();
        assert_eq!(json, "\"#ff5722\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_hex(0xFF5722));
    }
}
