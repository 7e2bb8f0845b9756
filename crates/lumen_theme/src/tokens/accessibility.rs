//! Accessibility tokens: focus indication, high contrast and target sizes

use lumen_core::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusRing {
    pub width: f32,
    pub offset: f32,
    /// CSS outline style
    pub style: String,
    pub color: Color,
}

impl FocusRing {
    /// CSS `outline` shorthand
    pub fn outline(&self) -> String {
        format!("{}px {} {}", self.width, self.style, self.color)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighContrast {
    pub enabled: bool,
    pub border_width: f32,
    pub outline_width: f32,
}

impl Default for HighContrast {
    fn default() -> Self {
        Self {
            enabled: false,
            border_width: 2.0,
            outline_width: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    pub focus_ring: FocusRing,
    pub high_contrast: HighContrast,
    /// Minimum interactive target edge, in px
    pub min_target_size: f32,
}

impl Accessibility {
    pub const DEFAULT_MIN_TARGET_SIZE: f32 = 44.0;

    /// Defaults with the focus ring drawn in `accent`
    pub fn with_accent(accent: Color) -> Self {
        Self {
            focus_ring: FocusRing {
                width: 2.0,
                offset: 2.0,
                style: "solid".to_string(),
                color: accent,
            },
            high_contrast: HighContrast::default(),
            min_target_size: Self::DEFAULT_MIN_TARGET_SIZE,
        }
    }

    /// Merge an override onto the defaults; an unset ring color follows `accent`
    pub fn compose(options: Option<&AccessibilityOptions>, accent: Color) -> Self {
        let mut a11y = Self::with_accent(accent);
        let Some(options) = options else {
            return a11y;
        };

        if let Some(ring) = &options.focus_ring {
            let target = &mut a11y.focus_ring;
            target.width = ring.width.unwrap_or(target.width);
            target.offset = ring.offset.unwrap_or(target.offset);
            if let Some(style) = &ring.style {
                target.style = style.clone();
            }
            target.color = ring.color.unwrap_or(target.color);
        }
        if let Some(contrast) = &options.high_contrast {
            let target = &mut a11y.high_contrast;
            target.enabled = contrast.enabled.unwrap_or(target.enabled);
            target.border_width = contrast.border_width.unwrap_or(target.border_width);
            target.outline_width = contrast.outline_width.unwrap_or(target.outline_width);
        }
        if let Some(size) = options.min_target_size {
            a11y.min_target_size = size;
        }
        a11y
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusRingOptions {
    pub width: Option<f32>,
    pub offset: Option<f32>,
    pub style: Option<String>,
    pub color: Option<Color>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighContrastOptions {
    pub enabled: Option<bool>,
    pub border_width: Option<f32>,
    pub outline_width: Option<f32>,
}

/// Partial accessibility override
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityOptions {
    pub focus_ring: Option<FocusRingOptions>,
    pub high_contrast: Option<HighContrastOptions>,
    pub min_target_size: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_color_follows_accent_unless_overridden() {
        let accent = Color::from_hex(0x1976D2);
        assert_eq!(Accessibility::compose(None, accent).focus_ring.color, accent);

        let options = AccessibilityOptions {
            focus_ring: Some(FocusRingOptions {
                color: Some(Color::BLACK),
                width: Some(3.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let a11y = Accessibility::compose(Some(&options), accent);
        assert_eq!(a11y.focus_ring.color, Color::BLACK);
        assert_eq!(a11y.focus_ring.outline(), "3px solid #000000");
        assert_eq!(a11y.focus_ring.offset, 2.0);
        assert!(!a11y.high_contrast.enabled);
    }
}
