//! Spacing tokens
//!
//! Spacing is expressed as multiples of a base unit. `spacing.apply(&[1.0, 2.0])`
//! yields `"8px 16px"` with the default 8px unit.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Caller-supplied spacing transform, receiving every factor at once
pub type SpacingFn = Arc<dyn Fn(&[f32]) -> String + Send + Sync>;

/// Spacing scale
#[derive(Clone)]
pub enum Spacing {
    /// Each factor is multiplied by this many px
    Factor(f32),
    /// Caller-supplied transform, used as-is
    Custom(SpacingFn),
}

impl Spacing {
    pub const DEFAULT_FACTOR: f32 = 8.0;

    /// Format `factors` as a space-separated list of CSS lengths.
    ///
    /// An empty list is treated as a single factor of 1.
    pub fn apply(&self, factors: &[f32]) -> String {
        match self {
            Spacing::Factor(unit) => {
                if factors.is_empty() {
                    return format!("{unit}px");
                }
                factors
                    .iter()
                    .map(|factor| format!("{}px", factor * unit))
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            Spacing::Custom(transform) => transform(factors),
        }
    }

    /// Shorthand for a single factor
    pub fn unit(&self, factor: f32) -> String {
        self.apply(&[factor])
    }

    /// The px multiplier, when the scale is a plain factor
    pub fn factor(&self) -> Option<f32> {
        match self {
            Spacing::Factor(unit) => Some(*unit),
            Spacing::Custom(_) => None,
        }
    }

    pub fn compose(options: Option<&SpacingOptions>) -> Self {
        match options {
            Some(SpacingOptions::Factor(unit)) => Spacing::Factor(*unit),
            Some(SpacingOptions::Custom(transform)) => Spacing::Custom(Arc::clone(transform)),
            None => Spacing::default(),
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Factor(Self::DEFAULT_FACTOR)
    }
}

impl fmt::Debug for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Factor(unit) => f.debug_tuple("Factor").field(unit).finish(),
            Spacing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Spacing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Spacing::Factor(a), Spacing::Factor(b)) => a == b,
            (Spacing::Custom(a), Spacing::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for Spacing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Spacing::Factor(unit) => serializer.serialize_f32(*unit),
            Spacing::Custom(_) => serializer.serialize_str(&self.unit(1.0)),
        }
    }
}

/// Spacing override: a px multiplier or a custom transform
#[derive(Clone)]
pub enum SpacingOptions {
    Factor(f32),
    Custom(SpacingFn),
}

impl SpacingOptions {
    pub fn custom(transform: impl Fn(&[f32]) -> String + Send + Sync + 'static) -> Self {
        SpacingOptions::Custom(Arc::new(transform))
    }
}

impl fmt::Debug for SpacingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacingOptions::Factor(unit) => f.debug_tuple("Factor").field(unit).finish(),
            SpacingOptions::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for SpacingOptions {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SpacingOptions::Factor(a), SpacingOptions::Factor(b)) => a == b,
            (SpacingOptions::Custom(a), SpacingOptions::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<f32> for SpacingOptions {
    fn from(unit: f32) -> Self {
        SpacingOptions::Factor(unit)
    }
}

impl Serialize for SpacingOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SpacingOptions::Factor(unit) => serializer.serialize_f32(*unit),
            SpacingOptions::Custom(_) => serializer.serialize_none(),
        }
    }
}

/// Only the numeric form can come from configuration
impl<'de> Deserialize<'de> for SpacingOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f32::deserialize(deserializer).map(SpacingOptions::Factor)
    }
}
