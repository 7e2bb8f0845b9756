//! Breakpoint resolution for single values and prop batches

use std::sync::Arc;

use indexmap::IndexMap;
use lumen_core::Breakpoint;

use crate::value::Responsive;

/// Named responsive props, in declaration order
pub type ResponsiveProps<T> = IndexMap<String, Responsive<T>>;

/// Resolved props; a key whose mapping has no entries resolves to `None`
pub type ResolvedProps<T> = IndexMap<String, Option<T>>;

/// Collapse `value` to the entry in effect at `current`.
///
/// Plain values pass through untouched, falsy ones included. Mappings use the
/// mobile-first cascade of [`BreakpointMap::resolve`](crate::BreakpointMap::resolve).
pub fn resolve<T>(value: &Responsive<T>, current: Breakpoint) -> Option<&T> {
    value.resolve(current)
}

/// Resolve every prop in `values` at `current`
pub fn resolve_batch<T: Clone>(values: &ResponsiveProps<T>, current: Breakpoint) -> ResolvedProps<T> {
    values
        .iter()
        .map(|(key, value)| (key.clone(), value.resolve_cloned(current)))
        .collect()
}

struct Memo<T> {
    values: Arc<ResponsiveProps<T>>,
    breakpoint: Breakpoint,
    output: Arc<ResolvedProps<T>>,
}

/// Memoized [`resolve_batch`].
///
/// Asking again with the same props (the same `Arc`, or equal contents) at
/// the same breakpoint returns the previously produced `Arc`, so consumers
/// can skip work with a pointer comparison. Only the most recent result is
/// kept.
pub struct BatchResolver<T> {
    last: Option<Memo<T>>,
}

impl<T: Clone + PartialEq> BatchResolver<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn resolve(
        &mut self,
        values: &Arc<ResponsiveProps<T>>,
        current: Breakpoint,
    ) -> Arc<ResolvedProps<T>> {
        if let Some(memo) = &self.last {
            if memo.breakpoint == current
                && (Arc::ptr_eq(&memo.values, values) || *memo.values == **values)
            {
                tracing::trace!(breakpoint = %current, props = values.len(), "batch cache hit");
                return Arc::clone(&memo.output);
            }
        }

        let output = Arc::new(resolve_batch(values, current));
        tracing::trace!(breakpoint = %current, props = values.len(), "batch resolved");
        self.last = Some(Memo {
            values: Arc::clone(values),
            breakpoint: current,
            output: Arc::clone(&output),
        });
        output
    }

    /// Drop the cached result
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

impl<T: Clone + PartialEq> Default for BatchResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}
