//! Viewport breakpoints
//!
//! A [`Breakpoint`] names a viewport-size tier. Tiers are totally ordered from
//! the smallest (`Xs`) to the largest (`Xl`), so `Breakpoint::Sm < Breakpoint::Lg`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named viewport-size tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Every breakpoint, smallest first
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Position in [`Breakpoint::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Breakpoint> {
        Self::ALL.get(index).copied()
    }

    /// Stable lowercase key ("xs" .. "xl")
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Next larger breakpoint, `None` for the largest
    pub fn next(self) -> Option<Breakpoint> {
        Self::from_index(self.index() + 1)
    }

    /// Next smaller breakpoint, `None` for the smallest
    pub fn prev(self) -> Option<Breakpoint> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown breakpoint `{0}` (expected one of xs, sm, md, lg, xl)")]
pub struct ParseBreakpointError(pub String);

/// Accepts exactly the lowercase names serde uses
impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .iter()
            .copied()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| ParseBreakpointError(s.to_string()))
    }
}

/// Minimum viewport width, in logical pixels, at which each breakpoint starts
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakpointValues {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
}

impl BreakpointValues {
    pub const DEFAULT: Self = Self {
        xs: 0.0,
        sm: 600.0,
        md: 900.0,
        lg: 1200.0,
        xl: 1536.0,
    };

    pub fn get(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    pub fn set(&mut self, breakpoint: Breakpoint, value: f64) {
        match breakpoint {
            Breakpoint::Xs => self.xs = value,
            Breakpoint::Sm => self.sm = value,
            Breakpoint::Md => self.md = value,
            Breakpoint::Lg => self.lg = value,
            Breakpoint::Xl => self.xl = value,
        }
    }

    /// Largest breakpoint whose threshold is at or below `width`
    pub fn classify(&self, width: f64) -> Breakpoint {
        Breakpoint::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= self.get(*bp))
            .unwrap_or(Breakpoint::Xs)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, f64)> + '_ {
        Breakpoint::ALL.iter().map(move |bp| (*bp, self.get(*bp)))
    }
}

impl Default for BreakpointValues {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_size() {
        assert!(Breakpoint::Xs < Breakpoint::Sm);
        assert!(Breakpoint::Lg < Breakpoint::Xl);
        assert_eq!(Breakpoint::Md.index(), 2);
        assert_eq!(Breakpoint::Xs.prev(), None);
        assert_eq!(Breakpoint::Xl.next(), None);
        assert_eq!(Breakpoint::Sm.next(), Some(Breakpoint::Md));
    }

    #[test]
    fn parses_names() {
        assert_eq!("md".parse::<Breakpoint>(), Ok(Breakpoint::Md));
        assert_eq!("xl".parse::<Breakpoint>(), Ok(Breakpoint::Xl));
        assert!("2xl".parse::<Breakpoint>().is_err());
        assert!("XL".parse::<Breakpoint>().is_err());
        assert!(" md".parse::<Breakpoint>().is_err());
    }

    #[test]
    fn classifies_default_widths() {
        let values = BreakpointValues::DEFAULT;
        assert_eq!(values.classify(0.0), Breakpoint::Xs);
        assert_eq!(values.classify(599.0), Breakpoint::Xs);
        assert_eq!(values.classify(600.0), Breakpoint::Sm);
        assert_eq!(values.classify(899.5), Breakpoint::Sm);
        assert_eq!(values.classify(900.0), Breakpoint::Md);
        assert_eq!(values.classify(1280.0), Breakpoint::Lg);
        assert_eq!(values.classify(1920.0), Breakpoint::Xl);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Breakpoint::Lg).unwrap();
        assert_eq!(json, "\"lg\"");
        let bp: Breakpoint = serde_json::from_str("\"sm\"").unwrap();
        assert_eq!(bp, Breakpoint::Sm);
        assert!(serde_json::from_str::<Breakpoint>("\"SM\"").is_err());
        for bp in Breakpoint::ALL {
            let parsed: Breakpoint = bp.name().parse().unwrap();
            assert_eq!(parsed, serde_json::from_value(serde_json::json!(bp.name())).unwrap());
        }
    }
}
