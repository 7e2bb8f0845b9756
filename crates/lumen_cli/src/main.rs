//! Lumen CLI
//!
//! Command-line front end for the Lumen theme and responsive crates.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lumen_core::Breakpoint;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{ModeArg, OutputFormat};
use config::LumenConfig;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(author, version, about = "Lumen theme and responsive tooling")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the composed theme
    Theme {
        /// Config file or directory containing lumen.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Force the palette mode
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the media queries for a breakpoint
    Media {
        /// Breakpoint name (xs, sm, md, lg, xl)
        breakpoint: Breakpoint,

        /// Config file or directory containing lumen.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve responsive props at a breakpoint
    Resolve {
        /// Props as a JSON object, e.g. '{"gap": {"xs": 1, "md": 3}}'
        props: String,

        /// Current breakpoint
        #[arg(short, long, conflicts_with = "width")]
        breakpoint: Option<Breakpoint>,

        /// Viewport width in pixels
        #[arg(short, long)]
        width: Option<f64>,

        /// Config file or directory containing lumen.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.command {
        Commands::Theme {
            config,
            mode,
            format,
        } => {
            let config = LumenConfig::discover(config.as_deref())?;
            commands::theme(&config, mode, format)?
        }
        Commands::Media { breakpoint, config } => {
            let config = LumenConfig::discover(config.as_deref())?;
            commands::media(&config, breakpoint)?
        }
        Commands::Resolve {
            props,
            breakpoint,
            width,
            config,
        } => {
            let config = LumenConfig::discover(config.as_deref())?;
            let breakpoint = commands::current_breakpoint(&config, breakpoint, width)?;
            tracing::debug!(%breakpoint, "resolving props");
            commands::resolve(&props, breakpoint)?
        }
    };

    println!("{output}");
    Ok(())
}
