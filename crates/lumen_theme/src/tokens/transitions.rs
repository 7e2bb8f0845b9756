//! Transition tokens: easing curves and durations

use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS `cubic-bezier(x1, y1, x2, y2)` timing function
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier(pub f32, pub f32, pub f32, pub f32);

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cubic-bezier({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

/// Named easing curves
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Easing {
    /// Most common curve; objects move between two on-screen positions
    pub ease_in_out: CubicBezier,
    /// Objects entering the screen
    pub ease_out: CubicBezier,
    /// Objects leaving the screen
    pub ease_in: CubicBezier,
    /// Objects that may return to the screen at any time
    pub sharp: CubicBezier,
}

impl Default for Easing {
    fn default() -> Self {
        Self {
            ease_in_out: CubicBezier(0.4, 0.0, 0.2, 1.0),
            ease_out: CubicBezier(0.0, 0.0, 0.2, 1.0),
            ease_in: CubicBezier(0.4, 0.0, 1.0, 1.0),
            sharp: CubicBezier(0.4, 0.0, 0.6, 1.0),
        }
    }
}

/// Named durations in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub shortest: u32,
    pub shorter: u32,
    pub short: u32,
    /// Most basic recommended timing
    pub standard: u32,
    /// Large areas of the screen
    pub complex: u32,
    pub entering_screen: u32,
    pub leaving_screen: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            shortest: 150,
            shorter: 200,
            short: 250,
            standard: 300,
            complex: 375,
            entering_screen: 225,
            leaving_screen: 195,
        }
    }
}

/// Complete set of transition tokens
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transitions {
    pub easing: Easing,
    pub duration: Durations,
}

impl Transitions {
    /// Build a CSS `transition` value for `props`.
    ///
    /// Defaults: `all`, the standard duration, `ease_in_out`, no delay.
    pub fn create(
        &self,
        props: &[&str],
        duration: Option<u32>,
        easing: Option<CubicBezier>,
        delay: u32,
    ) -> String {
        let duration = duration.unwrap_or(self.duration.standard);
        let easing = easing.unwrap_or(self.easing.ease_in_out);
        let props: &[&str] = if props.is_empty() { &["all"] } else { props };
        props
            .iter()
            .map(|prop| format!("{prop} {duration}ms {easing} {delay}ms"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Duration for animating to `height` px; grows sub-linearly with height
    pub fn auto_height_duration(height: f32) -> u32 {
        if height <= 0.0 {
            return 0;
        }
        let constant = height / 36.0;
        ((4.0 + 15.0 * constant.powf(0.25) + constant / 5.0) * 10.0).round() as u32
    }

    pub fn compose(options: Option<&TransitionsOptions>) -> Self {
        let mut transitions = Self::default();
        let Some(options) = options else {
            return transitions;
        };

        if let Some(easing) = &options.easing {
            let target = &mut transitions.easing;
            target.ease_in_out = easing.ease_in_out.unwrap_or(target.ease_in_out);
            target.ease_out = easing.ease_out.unwrap_or(target.ease_out);
            target.ease_in = easing.ease_in.unwrap_or(target.ease_in);
            target.sharp = easing.sharp.unwrap_or(target.sharp);
        }
        if let Some(duration) = &options.duration {
            let target = &mut transitions.duration;
            target.shortest = duration.shortest.unwrap_or(target.shortest);
            target.shorter = duration.shorter.unwrap_or(target.shorter);
            target.short = duration.short.unwrap_or(target.short);
            target.standard = duration.standard.unwrap_or(target.standard);
            target.complex = duration.complex.unwrap_or(target.complex);
            target.entering_screen = duration.entering_screen.unwrap_or(target.entering_screen);
            target.leaving_screen = duration.leaving_screen.unwrap_or(target.leaving_screen);
        }
        transitions
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasingOptions {
    pub ease_in_out: Option<CubicBezier>,
    pub ease_out: Option<CubicBezier>,
    pub ease_in: Option<CubicBezier>,
    pub sharp: Option<CubicBezier>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationOptions {
    pub shortest: Option<u32>,
    pub shorter: Option<u32>,
    pub short: Option<u32>,
    pub standard: Option<u32>,
    pub complex: Option<u32>,
    pub entering_screen: Option<u32>,
    pub leaving_screen: Option<u32>,
}

/// Partial transitions override
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionsOptions {
    pub easing: Option<EasingOptions>,
    pub duration: Option<DurationOptions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_css_transitions() {
        let transitions = Transitions::default();
        assert_eq!(
            transitions.create(&[], None, None, 0),
            "all 300ms cubic-bezier(0.4, 0, 0.2, 1) 0ms"
        );
        assert_eq!(
            transitions.create(&["opacity", "transform"], Some(150), Some(transitions.easing.sharp), 10),
            "opacity 150ms cubic-bezier(0.4, 0, 0.6, 1) 10ms,transform 150ms cubic-bezier(0.4, 0, 0.6, 1) 10ms"
        );
    }

    #[test]
    fn auto_height_duration_grows_with_height() {
        assert_eq!(Transitions::auto_height_duration(0.0), 0);
        let short = Transitions::auto_height_duration(100.0);
        let tall = Transitions::auto_height_duration(1000.0);
        assert!(short > 0);
        assert!(tall > short);
    }

    #[test]
    fn overrides_touch_only_named_fields() {
        let options = TransitionsOptions {
            duration: Some(DurationOptions {
                standard: Some(400),
                ..Default::default()
            }),
            easing: None,
        };
        let transitions = Transitions::compose(Some(&options));
        assert_eq!(transitions.duration.standard, 400);
        assert_eq!(transitions.duration.complex, 375);
        assert_eq!(transitions.easing, Easing::default());
    }
}
