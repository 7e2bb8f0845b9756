//! Theme aggregate and composition

use serde::Serialize;

use crate::error::ThemeError;
use crate::options::ThemeOptions;
use crate::tokens::*;

/// A complete, immutable set of design tokens.
///
/// Build one with [`create_theme`] (or [`Theme::light`] / [`Theme::dark`]) and
/// share it as `Arc<Theme>`; a theme change produces a new `Theme` rather
/// than mutating the current one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub spacing: Spacing,
    pub breakpoints: BreakpointsConfig,
    pub shadows: Shadows,
    pub transitions: Transitions,
    pub z_index: ZIndex,
    pub shape: Shape,
    pub accessibility: Accessibility,
}

impl Theme {
    /// Built-in light theme
    pub fn light() -> Self {
        assemble(Palette::light(), &ThemeOptions::default())
    }

    /// Built-in dark theme
    pub fn dark() -> Self {
        assemble(Palette::dark(), &ThemeOptions::default())
    }

    pub fn mode(&self) -> PaletteMode {
        self.palette.mode
    }

    /// Shorthand for `self.spacing.apply(factors)`
    pub fn spacing(&self, factors: &[f32]) -> String {
        self.spacing.apply(factors)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Compose a complete theme from partial overrides.
///
/// The palette defaults follow `options.palette.mode`. Role overrides derive
/// their missing variants from `main`; a role override without `main` is the
/// only failure. Every other section merges field by field onto its defaults.
pub fn create_theme(options: &ThemeOptions) -> Result<Theme, ThemeError> {
    let palette = Palette::compose(options.palette.as_ref())?;
    let theme = assemble(palette, options);
    tracing::debug!(
        mode = %theme.palette.mode,
        primary = %theme.palette.primary.main,
        "composed theme"
    );
    Ok(theme)
}

fn assemble(palette: Palette, options: &ThemeOptions) -> Theme {
    let accessibility =
        Accessibility::compose(options.accessibility.as_ref(), palette.primary.main);
    Theme {
        typography: Typography::compose(options.typography.as_ref()),
        spacing: Spacing::compose(options.spacing.as_ref()),
        breakpoints: BreakpointsConfig::compose(options.breakpoints.as_ref()),
        shadows: Shadows::compose(options.shadows.as_ref()),
        transitions: Transitions::compose(options.transitions.as_ref()),
        z_index: ZIndex::compose(options.z_index.as_ref()),
        shape: Shape::compose(options.shape.as_ref()),
        accessibility,
        palette,
    }
}
