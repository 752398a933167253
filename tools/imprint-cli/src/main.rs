//! Imprint CLI — Command-line interface for watermarking images.
//!
//! Usage:
//!   imprint export <IMAGE> [OPTIONS]   Watermark an image and export it
//!   imprint preview <IMAGE> [OPTIONS]  Render the preview surface to a file
//!   imprint info <IMAGE>               Show image and resize information
//!   imprint check                      Check fonts and configuration
//!   imprint config [--init]            Show or initialize the config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "imprint",
    about = "Text watermarking with live-preview-faithful export",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watermark an image and export it as PNG or JPEG
    Export {
        /// Path to the source image
        path: PathBuf,

        /// Output file path (format inferred from the extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for the generated timestamped filename
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Output format when no explicit output path is given
        #[arg(long, default_value = "png")]
        format: String,

        /// Output width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Output height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Scale preset percentage: 25, 50, 75, or 100
        #[arg(long)]
        scale: Option<u32>,

        /// Do not keep the aspect ratio when width or height is set
        #[arg(long)]
        no_lock: bool,

        /// Watermark font size in pixels
        #[arg(long)]
        font_size: Option<f32>,

        /// Watermark opacity [0.0, 1.0]
        #[arg(long)]
        opacity: Option<f32>,

        /// Watermark rotation in degrees
        #[arg(long)]
        rotation: Option<f32>,

        /// Watermark color (#RGB or #RRGGBB)
        #[arg(long)]
        color: Option<String>,

        /// Disable the drop shadow
        #[arg(long)]
        no_shadow: bool,

        /// Anchor: center, top-left, top-right, bottom-left,
        /// bottom-right, custom
        #[arg(long)]
        anchor: Option<String>,

        /// Custom position "x,y" in output pixels (implies --anchor custom)
        #[arg(long)]
        position: Option<String>,

        /// Explicit font file (overrides config and discovery)
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Render the preview surface (with interaction affordances) to a PNG
    Preview {
        /// Path to the source image
        path: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = "preview.png")]
        output: PathBuf,

        /// Device pixel ratio to simulate
        #[arg(long, default_value = "2.0")]
        dpr: f64,

        /// Anchor: center, top-left, top-right, bottom-left,
        /// bottom-right, custom
        #[arg(long)]
        anchor: Option<String>,

        /// Explicit font file (overrides config and discovery)
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Show image dimensions and resize preset information
    Info {
        /// Path to the source image
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check font availability and configuration
    Check,

    /// Show the effective configuration, or write the default config file
    Config {
        /// Write the default config file to the standard location
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    imprint_common::logging::init_logging(&imprint_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Export {
            path,
            output,
            output_dir,
            format,
            width,
            height,
            scale,
            no_lock,
            font_size,
            opacity,
            rotation,
            color,
            no_shadow,
            anchor,
            position,
            font,
        } => {
            commands::export::run(commands::export::ExportArgs {
                path,
                output,
                output_dir,
                format,
                width,
                height,
                scale,
                no_lock,
                font_size,
                opacity,
                rotation,
                color,
                no_shadow,
                anchor,
                position,
                font,
            })
            .await
        }
        Commands::Preview {
            path,
            output,
            dpr,
            anchor,
            font,
        } => commands::preview::run(path, output, dpr, anchor, font).await,
        Commands::Info { path, json } => commands::info::run(path, json).await,
        Commands::Check => commands::check::run(),
        Commands::Config { init } => commands::config::run(init),
    }
}
