//! Lumen Core
//!
//! Foundational value types shared by the Lumen crates:
//!
//! - **Colors**: CSS-compatible parsing and formatting, tonal mixing, WCAG contrast
//! - **Breakpoints**: ordered viewport tiers and their pixel thresholds
//!
//! # Example
//!
//! ```rust
//! use lumen_core::{Breakpoint, BreakpointValues, Color};
//!
//! let primary: Color = "#1976d2".parse().unwrap();
//! assert_eq!(primary.to_string(), "#1976d2");
//!
//! let bp = BreakpointValues::default().classify(1024.0);
//! assert_eq!(bp, Breakpoint::Md);
//! ```

pub mod breakpoint;
pub mod color;

pub use breakpoint::{Breakpoint, BreakpointValues, ParseBreakpointError};
pub use color::{Color, ColorParseError};
