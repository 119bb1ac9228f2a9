//! SinWave CLI
//!
//! Render the wave widget to SVG and run the demo screens headlessly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sinwave_core::{Color, Size};
use sinwave_widget::{WaveAttributes, DESIRED_WIDTH_PX, MIN_HEIGHT_DP};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod simulate;
mod svg;

use config::{SinwaveConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "sinwave")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SinWave wave widget CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./sinwave.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the wave to an SVG document
    Render {
        /// Surface width in pixels
        #[arg(long)]
        width: Option<f32>,

        /// Surface height in pixels
        #[arg(long)]
        height: Option<f32>,

        /// Wave amplitude in [0, 1]; out-of-range values are clamped
        #[arg(long, allow_negative_numbers = true)]
        waviness: Option<f32>,

        /// Wave color as #RRGGBB or #AARRGGBB
        #[arg(long)]
        color: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Drive a demo screen through a sweep of its control
    Simulate {
        #[command(subcommand)]
        screen: SimulateCommands,
    },

    /// Write a default sinwave.toml in the current directory
    Init,

    /// Show version and defaults
    Info,
}

#[derive(Subcommand)]
enum SimulateCommands {
    /// Move the seek bar from 0 to max
    Seekbar {
        /// Seek bar maximum (config value when omitted)
        #[arg(long)]
        max: Option<i32>,

        /// Number of increments
        #[arg(long, default_value = "10")]
        steps: u32,
    },

    /// Collapse the toolbar header
    Toolbar {
        /// Scroll distance in pixels (the header's own range when omitted)
        #[arg(long)]
        range: Option<f32>,

        /// Number of increments
        #[arg(long, default_value = "10")]
        steps: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            width,
            height,
            waviness,
            color,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_render(
                config,
                width,
                height,
                waviness,
                color.as_deref(),
                output.as_deref(),
            )
        }

        Commands::Simulate { screen } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_simulate(config, screen)
        }

        Commands::Init => cmd_init(),

        Commands::Info => cmd_info(),
    }
}

fn load_config(path: Option<&Path>) -> Result<SinwaveConfig> {
    let cwd = std::env::current_dir()?;
    SinwaveConfig::resolve(path, &cwd)
}

fn cmd_render(
    config: SinwaveConfig,
    width: Option<f32>,
    height: Option<f32>,
    waviness: Option<f32>,
    color: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let width = width.unwrap_or(config.surface.width);
    let height = height.unwrap_or(config.surface.height);
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        anyhow::bail!("Invalid surface size {}x{}", width, height);
    }

    let mut attributes: WaveAttributes = config.wave;
    if let Some(waviness) = waviness {
        attributes = attributes.waviness(waviness);
    }
    if let Some(color) = color {
        let color = Color::parse_hex(color).context("Invalid --color")?;
        attributes = attributes.wave_color(color);
    }

    info!(
        "Rendering {}x{} wave (waviness {}, color {})",
        width,
        height,
        attributes.waviness,
        attributes.wave_color.to_hex_string()
    );
    let document = svg::render_wave(attributes, Size::new(width, height));

    match output {
        Some(path) => {
            fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{document}"),
    }

    Ok(())
}

fn cmd_simulate(config: SinwaveConfig, screen: SimulateCommands) -> Result<()> {
    let app_config = config.app_config();
    let samples = match screen {
        SimulateCommands::Seekbar { max, steps } => {
            let max = max.unwrap_or(config.app.seekbar_max);
            simulate::seekbar(app_config, max, steps)?
        }
        SimulateCommands::Toolbar { range, steps } => {
            simulate::toolbar(app_config, range, steps)?
        }
    };

    print!("{}", simulate::table(&samples));

    Ok(())
}

fn cmd_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let path = cwd.join(CONFIG_FILE);

    // Check if already initialized
    if path.exists() {
        anyhow::bail!("This directory already contains a {}", CONFIG_FILE);
    }

    let content = SinwaveConfig::default().to_toml()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Created {}", path.display());
    Ok(())
}

fn cmd_info() -> Result<()> {
    let defaults = SinwaveConfig::default();

    println!("SinWave");
    println!("=======");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Widget defaults:");
    println!("  - wave color: {}", defaults.wave.wave_color.to_hex_string());
    println!("  - waviness: {}", defaults.wave.waviness);
    println!("  - desired width: {} px", DESIRED_WIDTH_PX);
    println!("  - minimum height: {} dp", MIN_HEIGHT_DP);
    println!();
    println!("Surface defaults:");
    println!(
        "  - {}x{} px at density {}",
        defaults.surface.width, defaults.surface.height, defaults.surface.density
    );
    println!();
    println!("Demo screens:");
    println!("  - seekbar (max {})", defaults.app.seekbar_max);
    println!(
        "  - toolbar (header {} px, title {} px)",
        defaults.app.header_height, defaults.app.title_height
    );

    Ok(())
}
