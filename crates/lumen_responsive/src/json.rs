//! Responsive values from untyped JSON
//!
//! Typed [`Responsive<T>`] values cannot be malformed, but props arriving as
//! JSON can. They are validated on the way in:
//!
//! - arrays are rejected, they are objects but not breakpoint maps
//! - objects are breakpoint maps and every key must name a breakpoint
//! - `null` inside a map means "not set at this breakpoint"
//! - anything else (numbers, strings, booleans, `null`) is a plain value

use lumen_core::Breakpoint;
use serde_json::Value;

use crate::error::ResponsiveError;
use crate::resolve::ResponsiveProps;
use crate::value::{BreakpointMap, Responsive};

/// Responsive value holding arbitrary JSON
pub type ResponsiveValue = Responsive<Value>;

impl Responsive<Value> {
    /// Validate and convert a JSON value
    pub fn from_json(value: Value) -> Result<Self, ResponsiveError> {
        match value {
            Value::Array(_) => Err(ResponsiveError::ArrayValue),
            Value::Object(entries) => {
                let mut map = BreakpointMap::new();
                for (key, entry) in entries {
                    let breakpoint: Breakpoint = key
                        .parse()
                        .map_err(|_| ResponsiveError::UnknownBreakpoint(key.clone()))?;
                    if !entry.is_null() {
                        map.set(breakpoint, entry);
                    }
                }
                Ok(Responsive::Breakpoints(map))
            }
            scalar => Ok(Responsive::Value(scalar)),
        }
    }
}

/// Validate and convert a JSON object of props
pub fn props_from_json(value: Value) -> Result<ResponsiveProps<Value>, ResponsiveError> {
    let Value::Object(entries) = value else {
        return Err(ResponsiveError::NotAnObject);
    };
    entries
        .into_iter()
        .map(|(key, value)| match Responsive::from_json(value) {
            Ok(responsive) => Ok((key, responsive)),
            Err(source) => Err(ResponsiveError::Prop {
                key,
                source: Box::new(source),
            }),
        })
        .collect()
}
