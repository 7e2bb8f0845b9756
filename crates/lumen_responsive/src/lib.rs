//! Lumen Responsive Values
//!
//! Props may be declared per breakpoint and collapsed to a single value for
//! the current viewport:
//!
//! - [`Responsive`]: a plain value or a partial [`BreakpointMap`]
//! - [`resolve`] / [`resolve_batch`]: mobile-first resolution
//! - [`BatchResolver`]: memoized batch resolution with stable output `Arc`s
//! - [`current_breakpoint`] / [`ViewportState`]: deciding which breakpoint is active
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use lumen_core::Breakpoint;
//! use lumen_responsive::{BatchResolver, BreakpointMap, Responsive, ResponsiveProps};
//!
//! let mut props = ResponsiveProps::new();
//! props.insert("gap".to_string(), Responsive::from(BreakpointMap::new().xs(1).md(3)));
//! props.insert("columns".to_string(), Responsive::Value(12));
//! let props = Arc::new(props);
//!
//! let mut resolver = BatchResolver::new();
//! let resolved = resolver.resolve(&props, Breakpoint::Sm);
//! assert_eq!(resolved["gap"], Some(1));
//! assert!(Arc::ptr_eq(&resolved, &resolver.resolve(&props, Breakpoint::Sm)));
//! ```

pub mod error;
pub mod json;
pub mod resolve;
pub mod value;
pub mod viewport;

pub use error::ResponsiveError;
pub use json::{props_from_json, ResponsiveValue};
pub use resolve::{resolve, resolve_batch, BatchResolver, ResolvedProps, ResponsiveProps};
pub use value::{BreakpointMap, Responsive};
pub use viewport::{current_breakpoint, MediaMatcher, ViewportState, WidthMatcher};
