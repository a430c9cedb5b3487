// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use darkroom::filters::FilterKind;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "darkroom")]
#[command(about = "Photo filter application")]
#[command(version = darkroom::constants::app_info::version())]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in filters and their adjustable parameters
    Filters,

    /// Apply a filter to a photo and export the result
    Apply {
        /// Source photo path
        #[arg(short, long)]
        input: PathBuf,

        /// Filter to apply (see 'darkroom filters')
        #[arg(short, long, default_value = "sepia-tone")]
        filter: FilterKind,

        /// Effect intensity, 0.0-1.0
        #[arg(long, default_value = "0.5")]
        intensity: f64,

        /// Effect radius, 0.0-1.0
        #[arg(long, default_value = "0.5")]
        radius: f64,

        /// Output file path (default: ~/Pictures/darkroom/FILTERED_TIMESTAMP.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the exported file when done
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=darkroom=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filters => cli::list_filters(),
        Commands::Apply {
            input,
            filter,
            intensity,
            radius,
            output,
            show,
        } => cli::apply_filter(input, filter, intensity, radius, output, show),
    }
}
