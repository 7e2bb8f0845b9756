//! Lumen Theme System
//!
//! Composes a complete, immutable [`Theme`] from partial overrides.
//!
//! # Overview
//!
//! - **Design tokens**: palette, typography, spacing, breakpoints, shadows,
//!   transitions, z-index, shape and accessibility
//! - **Light and dark defaults**: two fully populated built-in palettes
//! - **Color derivation**: a palette role override only needs `main`; light,
//!   dark and contrast text are generated from it
//! - **Explicit distribution**: [`ThemeProvider`] hands out `Arc<Theme>` and
//!   swaps it on change, [`ThemeScope`] offers a nested thread-local scope
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_core::{Breakpoint, Color};
//! use lumen_theme::{create_theme, PaletteColorOptions, PaletteOptions, ThemeOptions};
//!
//! let options = ThemeOptions {
//!     palette: Some(PaletteOptions {
//!         primary: Some(PaletteColorOptions::main(Color::from_hex(0xFF5722))),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let theme = create_theme(&options).unwrap();
//! assert_ne!(theme.palette.primary.light, theme.palette.primary.main);
//! assert_eq!(theme.spacing(&[2.0]), "16px");
//! assert_eq!(theme.breakpoints.up(Breakpoint::Md), "@media (min-width:900px)");
//! ```
//!
//! # Configuration
//!
//! [`ThemeOptions`] deserializes from TOML via [`ThemeOptions::load`] or
//! [`ThemeOptions::from_toml_str`].

pub mod error;
pub mod options;
pub mod state;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use error::ThemeError;
pub use options::ThemeOptions;
pub use state::{ListenerId, ThemeListener, ThemeProvider, ThemeScope};
pub use theme::{create_theme, Theme};
pub use tokens::*;
