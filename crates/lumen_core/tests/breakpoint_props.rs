//! Property tests for breakpoint classification and color mixing

use lumen_core::{Breakpoint, BreakpointValues, Color};
use proptest::prelude::*;

fn values(sm: f64, md_offset: f64, lg_offset: f64, xl_offset: f64) -> BreakpointValues {
    let md = sm + md_offset;
    let lg = md + lg_offset;
    BreakpointValues {
        xs: 0.0,
        sm,
        md,
        lg,
        xl: lg + xl_offset,
    }
}

proptest! {
    #[test]
    fn classification_is_monotonic(
        sm in 1.0f64..400.0,
        md_offset in 1.0f64..400.0,
        lg_offset in 1.0f64..400.0,
        xl_offset in 1.0f64..400.0,
        w1 in 0.0f64..2500.0,
        w2 in 0.0f64..2500.0,
    ) {
        let bp = values(sm, md_offset, lg_offset, xl_offset);
        let (lo, hi) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
        prop_assert!(bp.classify(lo) <= bp.classify(hi));
    }

    #[test]
    fn every_threshold_is_reachable(
        sm in 1.0f64..400.0,
        md_offset in 1.0f64..400.0,
        lg_offset in 1.0f64..400.0,
        xl_offset in 1.0f64..400.0,
    ) {
        let bp = values(sm, md_offset, lg_offset, xl_offset);
        for breakpoint in Breakpoint::ALL {
            prop_assert_eq!(bp.classify(bp.get(breakpoint)), breakpoint);
        }
    }

    #[test]
    fn hex_display_parses_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::from_rgba8(r, g, b, 255);
        let parsed: Color = color.to_string().parse().unwrap();
        prop_assert_eq!(parsed.to_rgba8(), [r, g, b, 255]);
    }

    #[test]
    fn lighten_never_darkens(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), k in 0.0f32..1.0) {
        let color = Color::from_rgba8(r, g, b, 255);
        prop_assert!(color.lighten(k).relative_luminance() >= color.relative_luminance() - 1e-6);
        prop_assert!(color.darken(k).relative_luminance() <= color.relative_luminance() + 1e-6);
    }
}
