//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Palette colors
//! - Typography (fonts, sizes, weights)
//! - Spacing
//! - Breakpoints and media queries
//! - Shadows
//! - Transitions (easings and durations)
//! - Z-index layers
//! - Shape
//! - Accessibility
//!
//! Each token group comes with a partial `*Options` counterpart and a
//! `compose` constructor that merges the override onto the defaults.

mod accessibility;
mod breakpoints;
mod palette;
mod shadow;
mod shape;
mod spacing;
mod transitions;
mod typography;
mod z_index;

pub use accessibility::*;
pub use breakpoints::*;
pub use palette::*;
pub use shadow::*;
pub use shape::*;
pub use spacing::*;
pub use transitions::*;
pub use typography::*;
pub use z_index::*;
