//! Breakpoint tokens and media query helpers

use lumen_core::{Breakpoint, BreakpointValues};
use serde::{Deserialize, Serialize};

/// Breakpoint thresholds plus the unit and step used to build media queries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakpointsConfig {
    pub values: BreakpointValues,
    pub unit: String,
    /// Query ranges end `step / 100` units below the next threshold
    pub step: f64,
}

impl BreakpointsConfig {
    pub const DEFAULT_UNIT: &'static str = "px";
    pub const DEFAULT_STEP: f64 = 5.0;

    /// Gap between one range's upper bound and the next range's lower bound
    pub fn epsilon(&self) -> f64 {
        self.step / 100.0
    }

    /// `@media (min-width:<threshold>)`
    pub fn up(&self, key: Breakpoint) -> String {
        format!("@media (min-width:{}{})", self.values.get(key), self.unit)
    }

    /// `@media (max-width:<threshold - epsilon>)`
    pub fn down(&self, key: Breakpoint) -> String {
        format!("@media (max-width:{}{})", self.upper_bound(key), self.unit)
    }

    /// Widths from `start` up to just below `end`
    pub fn between(&self, start: Breakpoint, end: Breakpoint) -> String {
        format!(
            "@media (min-width:{}{unit}) and (max-width:{}{unit})",
            self.values.get(start),
            self.upper_bound(end),
            unit = self.unit
        )
    }

    /// Widths classified as exactly `key`
    pub fn only(&self, key: Breakpoint) -> String {
        match key.next() {
            Some(next) => self.between(key, next),
            None => self.up(key),
        }
    }

    /// Widths not classified as `key`
    pub fn not(&self, key: Breakpoint) -> String {
        match (key.prev(), key.next()) {
            (None, Some(next)) => self.up(next),
            (Some(_), None) => self.down(key),
            _ => self.only(key).replacen("@media", "@media not all and", 1),
        }
    }

    /// Breakpoint in effect at `width`
    pub fn classify(&self, width: f64) -> Breakpoint {
        self.values.classify(width)
    }

    fn upper_bound(&self, key: Breakpoint) -> f64 {
        self.values.get(key) - self.epsilon()
    }

    pub fn compose(options: Option<&BreakpointsOptions>) -> Self {
        let mut config = Self::default();
        let Some(options) = options else {
            return config;
        };

        if let Some(values) = &options.values {
            for key in Breakpoint::ALL {
                if let Some(value) = values.get(key) {
                    config.values.set(key, value);
                }
            }
        }
        if let Some(unit) = &options.unit {
            config.unit = unit.clone();
        }
        if let Some(step) = options.step {
            config.step = step;
        }
        config
    }
}

impl Default for BreakpointsConfig {
    fn default() -> Self {
        Self {
            values: BreakpointValues::DEFAULT,
            unit: Self::DEFAULT_UNIT.to_string(),
            step: Self::DEFAULT_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointValuesOptions {
    pub xs: Option<f64>,
    pub sm: Option<f64>,
    pub md: Option<f64>,
    pub lg: Option<f64>,
    pub xl: Option<f64>,
}

impl BreakpointValuesOptions {
    pub fn get(&self, key: Breakpoint) -> Option<f64> {
        match key {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }
}

/// Partial breakpoints override
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointsOptions {
    pub values: Option<BreakpointValuesOptions>,
    pub unit: Option<String>,
    pub step: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_queries() {
        let bp = BreakpointsConfig::default();
        assert_eq!(bp.up(Breakpoint::Md), "@media (min-width:900px)");
        assert_eq!(bp.down(Breakpoint::Md), "@media (max-width:899.95px)");
        assert_eq!(
            bp.between(Breakpoint::Sm, Breakpoint::Lg),
            "@media (min-width:600px) and (max-width:1199.95px)"
        );
        assert_eq!(bp.only(Breakpoint::Xl), bp.up(Breakpoint::Xl));
        assert_eq!(bp.only(Breakpoint::Sm), bp.between(Breakpoint::Sm, Breakpoint::Md));
    }

    #[test]
    fn not_queries() {
        let bp = BreakpointsConfig::default();
        assert_eq!(bp.not(Breakpoint::Xs), bp.up(Breakpoint::Sm));
        assert_eq!(bp.not(Breakpoint::Xl), bp.down(Breakpoint::Xl));
        assert_eq!(
            bp.not(Breakpoint::Md),
            "@media not all and (min-width:900px) and (max-width:1199.95px)"
        );
    }

    #[test]
    fn overrides_merge_per_key() {
        let options = BreakpointsOptions {
            values: Some(BreakpointValuesOptions {
                md: Some(1000.0),
                ..Default::default()
            }),
            unit: Some("em".into()),
            step: None,
        };
        let bp = BreakpointsConfig::compose(Some(&options));
        assert_eq!(bp.values.md, 1000.0);
        assert_eq!(bp.values.sm, 600.0);
        assert_eq!(bp.up(Breakpoint::Md), "@media (min-width:1000em)");
        assert_eq!(bp.step, BreakpointsConfig::DEFAULT_STEP);
    }
}
