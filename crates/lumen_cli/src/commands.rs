//! Subcommand implementations
//!
//! Each command renders its output to a `String` so `main` only has to print.

use anyhow::{Context, Result};
use lumen_core::Breakpoint;
use lumen_responsive::{props_from_json, resolve_batch};
use lumen_theme::{create_theme, PaletteMode, Theme};

use crate::config::LumenConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for PaletteMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Light => PaletteMode::Light,
            ModeArg::Dark => PaletteMode::Dark,
        }
    }
}

/// Compose the configured theme, optionally forcing a palette mode
pub fn compose(config: &LumenConfig, mode: Option<ModeArg>) -> Result<Theme> {
    let mut options = config.theme.clone();
    if let Some(mode) = mode {
        options.set_mode(mode.into());
    }
    let theme = create_theme(&options).context("Failed to compose theme")?;
    tracing::debug!(mode = %theme.mode(), "theme composed");
    Ok(theme)
}

pub fn theme(config: &LumenConfig, mode: Option<ModeArg>, format: OutputFormat) -> Result<String> {
    let theme = compose(config, mode)?;
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&theme).context("Failed to serialize theme as JSON")
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(&theme).context("Failed to serialize theme as TOML")
        }
    }
}

pub fn media(config: &LumenConfig, breakpoint: Breakpoint) -> Result<String> {
    let theme = compose(config, None)?;
    let queries = &theme.breakpoints;
    Ok([
        format!("up:   {}", queries.up(breakpoint)),
        format!("down: {}", queries.down(breakpoint)),
        format!("only: {}", queries.only(breakpoint)),
        format!("not:  {}", queries.not(breakpoint)),
    ]
    .join("\n"))
}

/// Breakpoint from the flags, falling back to the configured viewport width
pub fn current_breakpoint(
    config: &LumenConfig,
    breakpoint: Option<Breakpoint>,
    width: Option<f64>,
) -> Result<Breakpoint> {
    if let Some(breakpoint) = breakpoint {
        return Ok(breakpoint);
    }
    let Some(width) = width.or(config.viewport.width) else {
        anyhow::bail!("Pass --breakpoint or --width, or set [viewport] width in lumen.toml");
    };
    let theme = compose(config, None)?;
    let breakpoint = theme.breakpoints.classify(width);
    tracing::debug!(width, %breakpoint, "classified viewport width");
    Ok(breakpoint)
}

pub fn resolve(props: &str, breakpoint: Breakpoint) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(props).context("Props are not valid JSON")?;
    let props = props_from_json(value).context("Invalid responsive props")?;
    let resolved = resolve_batch(&props, breakpoint);
    serde_json::to_string_pretty(&resolved).context("Failed to serialize resolved props")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> LumenConfig {
        LumenConfig::from_toml_str(toml).unwrap()
    }

    #[test]
    fn theme_json_honours_mode_flag() {
        let out = theme(&LumenConfig::default(), Some(ModeArg::Dark), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["palette"]["mode"], "dark");
        assert_eq!(json["palette"]["background"]["default"], "#121212");
    }

    #[test]
    fn theme_toml_renders() {
        let out = theme(&LumenConfig::default(), None, OutputFormat::Toml).unwrap();
        assert!(out.contains("[palette.primary]"));
    }

    #[test]
    fn theme_reports_missing_main() {
        let config = config("[theme.palette.primary]\nlight = \"#ffffff\"\n");
        let err = theme(&config, None, OutputFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("primary"));
    }

    #[test]
    fn media_prints_all_queries() {
        let out = media(&LumenConfig::default(), Breakpoint::Md).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "up:   @media (min-width:900px)");
        assert_eq!(lines[1], "down: @media (max-width:899.95px)");
        assert_eq!(
            lines[2],
            "only: @media (min-width:900px) and (max-width:1199.95px)"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn breakpoint_from_width_uses_configured_values() {
        let defaults = LumenConfig::default();
        assert_eq!(
            current_breakpoint(&defaults, None, Some(1024.0)).unwrap(),
            Breakpoint::Md
        );
        assert_eq!(
            current_breakpoint(&defaults, Some(Breakpoint::Xl), Some(10.0)).unwrap(),
            Breakpoint::Xl
        );

        let viewport = config("[viewport]\nwidth = 650\n");
        assert_eq!(current_breakpoint(&viewport, None, None).unwrap(), Breakpoint::Sm);

        assert!(current_breakpoint(&defaults, None, None).is_err());
    }

    #[test]
    fn resolve_prints_scalars() {
        let out = resolve(r#"{"gap": {"xs": 1, "md": 3}, "hidden": false}"#, Breakpoint::Lg).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json, serde_json::json!({"gap": 3, "hidden": false}));
    }

    #[test]
    fn resolve_rejects_bad_props() {
        let err = resolve(r#"{"gap": [1, 2]}"#, Breakpoint::Xs).unwrap_err();
        assert!(format!("{err:#}").contains("gap"));
        assert!(resolve("[]", Breakpoint::Xs).is_err());
        assert!(resolve("not json", Breakpoint::Xs).is_err());
    }
}
