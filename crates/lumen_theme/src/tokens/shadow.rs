//! Shadow tokens for theming
//!
//! Elevation levels 0 through 24. Level 0 is flat; every other level stacks an
//! umbra, penumbra and ambient layer.

use lumen_core::Color;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A single box shadow layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

/// Layers making up one elevation level
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxShadow(pub SmallVec<[Shadow; 3]>);

impl BoxShadow {
    pub fn none() -> Self {
        Self(SmallVec::new())
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn layers(&self) -> &[Shadow] {
        &self.0
    }
}

impl From<Vec<Shadow>> for BoxShadow {
    fn from(layers: Vec<Shadow>) -> Self {
        Self(SmallVec::from_vec(layers))
    }
}

impl fmt::Display for BoxShadow {
    /// CSS `box-shadow` value
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        for (i, layer) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}

/// Complete set of elevation shadows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shadows(Vec<BoxShadow>);

const UMBRA_ALPHA: f32 = 0.2;
const PENUMBRA_ALPHA: f32 = 0.14;
const AMBIENT_ALPHA: f32 = 0.12;

/// Umbra, penumbra, ambient geometry (`x y blur spread` each) for levels 1..=24
const ELEVATIONS: [[f32; 12]; 24] = [
    [0., 2., 1., -1., 0., 1., 1., 0., 0., 1., 3., 0.],
    [0., 3., 1., -2., 0., 2., 2., 0., 0., 1., 5., 0.],
    [0., 3., 3., -2., 0., 3., 4., 0., 0., 1., 8., 0.],
    [0., 2., 4., -1., 0., 4., 5., 0., 0., 1., 10., 0.],
    [0., 3., 5., -1., 0., 5., 8., 0., 0., 1., 14., 0.],
    [0., 3., 5., -1., 0., 6., 10., 0., 0., 1., 18., 0.],
    [0., 4., 5., -2., 0., 7., 10., 1., 0., 2., 16., 1.],
    [0., 5., 5., -3., 0., 8., 10., 1., 0., 3., 14., 2.],
    [0., 5., 6., -3., 0., 9., 12., 1., 0., 3., 16., 2.],
    [0., 6., 6., -3., 0., 10., 14., 1., 0., 4., 18., 3.],
    [0., 6., 7., -4., 0., 11., 15., 1., 0., 4., 20., 3.],
    [0., 7., 8., -4., 0., 12., 17., 2., 0., 5., 22., 4.],
    [0., 7., 8., -4., 0., 13., 19., 2., 0., 5., 24., 4.],
    [0., 7., 9., -4., 0., 14., 21., 2., 0., 5., 26., 4.],
    [0., 8., 9., -5., 0., 15., 22., 2., 0., 6., 28., 5.],
    [0., 8., 10., -5., 0., 16., 24., 2., 0., 6., 30., 5.],
    [0., 8., 11., -5., 0., 17., 26., 2., 0., 6., 32., 5.],
    [0., 9., 11., -5., 0., 18., 28., 2., 0., 7., 34., 6.],
    [0., 9., 12., -6., 0., 19., 29., 2., 0., 7., 36., 6.],
    [0., 10., 13., -6., 0., 20., 31., 3., 0., 8., 38., 7.],
    [0., 10., 13., -6., 0., 21., 33., 3., 0., 8., 40., 7.],
    [0., 10., 14., -6., 0., 22., 35., 3., 0., 8., 42., 7.],
    [0., 11., 14., -7., 0., 23., 36., 3., 0., 9., 44., 8.],
    [0., 11., 15., -7., 0., 24., 38., 3., 0., 9., 46., 8.],
];

fn elevation(geometry: &[f32; 12]) -> BoxShadow {
    let layer = |offset: usize, alpha: f32| {
        Shadow::new(
            geometry[offset],
            geometry[offset + 1],
            geometry[offset + 2],
            geometry[offset + 3],
            Color::BLACK.with_alpha(alpha),
        )
    };
    BoxShadow(SmallVec::from_buf([
        layer(0, UMBRA_ALPHA),
        layer(4, PENUMBRA_ALPHA),
        layer(8, AMBIENT_ALPHA),
    ]))
}

impl Shadows {
    /// Number of elevation levels, including the flat level 0
    pub const LEVELS: usize = 25;

    /// Get shadow by elevation level
    pub fn get(&self, level: usize) -> Option<&BoxShadow> {
        self.0.get(level)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxShadow> {
        self.0.iter()
    }

    /// Replace individual levels; levels past the last one are skipped
    pub fn compose(options: Option<&ShadowsOptions>) -> Self {
        let mut shadows = Self::default();
        for entry in options.into_iter().flatten() {
            match shadows.0.get_mut(entry.level) {
                Some(slot) => *slot = entry.shadow.clone(),
                None => tracing::warn!(
                    level = entry.level,
                    max = Self::LEVELS - 1,
                    "ignoring shadow override for unknown elevation level"
                ),
            }
        }
        shadows
    }
}

impl Default for Shadows {
    fn default() -> Self {
        let mut levels = Vec::with_capacity(Self::LEVELS);
        levels.push(BoxShadow::none());
        levels.extend(ELEVATIONS.iter().map(elevation));
        Self(levels)
    }
}

/// Replacement for one elevation level
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowOverride {
    pub level: usize,
    #[serde(default)]
    pub shadow: BoxShadow,
}

/// Per-level shadow overrides
pub type ShadowsOptions = Vec<ShadowOverride>;
