//! Current-breakpoint detection
//!
//! Which breakpoint is active is decided by an external collaborator, usually
//! a media-query or window-size observer. [`MediaMatcher`] is the seam: it only
//! has to answer "is this breakpoint active right now?".

use lumen_core::{Breakpoint, BreakpointValues};

use crate::value::Responsive;

/// Answers whether a breakpoint's min-width query currently matches
pub trait MediaMatcher {
    fn matches(&self, breakpoint: Breakpoint) -> bool;
}

impl<F> MediaMatcher for F
where
    F: Fn(Breakpoint) -> bool,
{
    fn matches(&self, breakpoint: Breakpoint) -> bool {
        self(breakpoint)
    }
}

/// Largest matching breakpoint, `Xs` when nothing matches
pub fn current_breakpoint<M: MediaMatcher + ?Sized>(matcher: &M) -> Breakpoint {
    Breakpoint::ALL
        .iter()
        .rev()
        .copied()
        .find(|bp| matcher.matches(*bp))
        .unwrap_or(Breakpoint::Xs)
}

/// Matches breakpoints against a known viewport width
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthMatcher {
    pub width: f64,
    pub values: BreakpointValues,
}

impl WidthMatcher {
    pub fn new(width: f64, values: BreakpointValues) -> Self {
        Self { width, values }
    }
}

impl MediaMatcher for WidthMatcher {
    fn matches(&self, breakpoint: Breakpoint) -> bool {
        self.width >= self.values.get(breakpoint)
    }
}

/// Tracks the viewport width and the breakpoint it falls in
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    values: BreakpointValues,
    width: f64,
    current: Breakpoint,
}

impl ViewportState {
    pub fn new(width: f64, values: BreakpointValues) -> Self {
        Self {
            values,
            width,
            current: values.classify(width),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn current(&self) -> Breakpoint {
        self.current
    }

    pub fn values(&self) -> &BreakpointValues {
        &self.values
    }

    /// Record a new width; returns the new breakpoint when it changed
    pub fn update(&mut self, width: f64) -> Option<Breakpoint> {
        self.width = width;
        let next = self.values.classify(width);
        if next == self.current {
            return None;
        }
        tracing::debug!(from = %self.current, to = %next, width, "breakpoint changed");
        self.current = next;
        Some(next)
    }

    /// Resolve `value` at the current breakpoint
    pub fn resolve<'a, T>(&self, value: &'a Responsive<T>) -> Option<&'a T> {
        value.resolve(self.current)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0.0, BreakpointValues::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_match() {
        let only_small = |bp: Breakpoint| bp <= Breakpoint::Sm;
        assert_eq!(current_breakpoint(&only_small), Breakpoint::Sm);
        let none = |_: Breakpoint| false;
        assert_eq!(current_breakpoint(&none), Breakpoint::Xs);
    }

    #[test]
    fn width_matcher_uses_thresholds() {
        let matcher = WidthMatcher::new(1024.0, BreakpointValues::DEFAULT);
        assert_eq!(current_breakpoint(&matcher), Breakpoint::Md);
        let matcher = WidthMatcher::new(1536.0, BreakpointValues::DEFAULT);
        assert_eq!(current_breakpoint(&matcher), Breakpoint::Xl);
    }

    #[test]
    fn update_reports_changes_only() {
        let mut viewport = ViewportState::new(320.0, BreakpointValues::DEFAULT);
        assert_eq!(viewport.current(), Breakpoint::Xs);
        assert_eq!(viewport.update(400.0), None);
        assert_eq!(viewport.update(700.0), Some(Breakpoint::Sm));
        assert_eq!(viewport.update(1300.0), Some(Breakpoint::Lg));
        assert_eq!(viewport.width(), 1300.0);
    }
}
