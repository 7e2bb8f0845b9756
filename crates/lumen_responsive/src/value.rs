//! Responsive values
//!
//! A prop is either a plain value or a partial per-breakpoint mapping:
//!
//! ```rust
//! use lumen_core::Breakpoint;
//! use lumen_responsive::{BreakpointMap, Responsive};
//!
//! let gap = Responsive::from(BreakpointMap::new().xs(1).md(3));
//! assert_eq!(gap.resolve(Breakpoint::Sm), Some(&1));
//! assert_eq!(gap.resolve(Breakpoint::Xl), Some(&3));
//! ```

use lumen_core::Breakpoint;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Partial mapping from breakpoint to value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BreakpointMap<T> {
    entries: [Option<T>; 5],
}

impl<T> BreakpointMap<T> {
    pub fn new() -> Self {
        Self {
            entries: [None, None, None, None, None],
        }
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.entries[breakpoint.index()].as_ref()
    }

    /// Set the value for `breakpoint`, returning the previous one
    pub fn set(&mut self, breakpoint: Breakpoint, value: T) -> Option<T> {
        self.entries[breakpoint.index()].replace(value)
    }

    pub fn remove(&mut self, breakpoint: Breakpoint) -> Option<T> {
        self.entries[breakpoint.index()].take()
    }

    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.set(breakpoint, value);
        self
    }

    pub fn xs(self, value: T) -> Self {
        self.with(Breakpoint::Xs, value)
    }

    pub fn sm(self, value: T) -> Self {
        self.with(Breakpoint::Sm, value)
    }

    pub fn md(self, value: T) -> Self {
        self.with(Breakpoint::Md, value)
    }

    pub fn lg(self, value: T) -> Self {
        self.with(Breakpoint::Lg, value)
    }

    pub fn xl(self, value: T) -> Self {
        self.with(Breakpoint::Xl, value)
    }

    /// True when no breakpoint has a value
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// Defined entries, smallest breakpoint first
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL
            .iter()
            .zip(self.entries.iter())
            .filter_map(|(bp, value)| value.as_ref().map(|v| (*bp, v)))
    }

    /// Value in effect at `current`.
    ///
    /// Mobile-first: the closest entry at or below `current` wins. When nothing
    /// is defined at or below `current`, the smallest defined entry is used.
    pub fn resolve(&self, current: Breakpoint) -> Option<&T> {
        self.entries[..=current.index()]
            .iter()
            .rev()
            .find_map(Option::as_ref)
            .or_else(|| self.entries.iter().find_map(Option::as_ref))
    }
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Breakpoint, T)> for BreakpointMap<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (breakpoint, value) in iter {
            map.set(breakpoint, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for BreakpointMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (breakpoint, value) in self.iter() {
            map.serialize_entry(breakpoint.name(), value)?;
        }
        map.end()
    }
}

/// Keys must be breakpoint names; `null` entries count as absent
impl<'de, T: Deserialize<'de>> Deserialize<'de> for BreakpointMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<Breakpoint, Option<T>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(bp, value)| value.map(|v| (bp, v)))
            .collect())
    }
}

/// A value that is either fixed or varies per breakpoint
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Responsive<T> {
    /// Same value at every breakpoint
    Value(T),
    /// Per-breakpoint values
    Breakpoints(BreakpointMap<T>),
}

impl<T> Responsive<T> {
    pub fn value(value: T) -> Self {
        Responsive::Value(value)
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, Responsive::Breakpoints(_))
    }

    /// Value in effect at `current`; plain values are returned unchanged
    pub fn resolve(&self, current: Breakpoint) -> Option<&T> {
        match self {
            Responsive::Value(value) => Some(value),
            Responsive::Breakpoints(map) => map.resolve(current),
        }
    }

    pub fn resolve_cloned(&self, current: Breakpoint) -> Option<T>
    where
        T: Clone,
    {
        self.resolve(current).cloned()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        match self {
            Responsive::Value(value) => Responsive::Value(f(value)),
            Responsive::Breakpoints(map) => Responsive::Breakpoints(BreakpointMap {
                entries: map.entries.map(|entry| entry.map(&mut f)),
            }),
        }
    }
}

impl<T> From<BreakpointMap<T>> for Responsive<T> {
    fn from(map: BreakpointMap<T>) -> Self {
        Responsive::Breakpoints(map)
    }
}

impl<T: Serialize> Serialize for Responsive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Responsive::Value(value) => value.serialize(serializer),
            Responsive::Breakpoints(map) => map.serialize(serializer),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ResponsiveInput<T> {
    Breakpoints(BreakpointMap<T>),
    Value(T),
}

/// A map keyed by breakpoint names becomes [`Responsive::Breakpoints`];
/// anything else is a plain value
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Responsive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ResponsiveInput::deserialize(deserializer)? {
            ResponsiveInput::Breakpoints(map) => Responsive::Breakpoints(map),
            ResponsiveInput::Value(value) => Responsive::Value(value),
        })
    }
}
