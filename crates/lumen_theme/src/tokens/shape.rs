//! Shape tokens

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Corner radius in px
    pub border_radius: f32,
}

impl Shape {
    pub fn compose(options: Option<&ShapeOptions>) -> Self {
        let defaults = Self::default();
        Self {
            border_radius: options
                .and_then(|o| o.border_radius)
                .unwrap_or(defaults.border_radius),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self { border_radius: 4.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeOptions {
    pub border_radius: Option<f32>,
}
