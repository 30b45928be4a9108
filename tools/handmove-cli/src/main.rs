//! HandMove CLI: replay hand frame streams through the movement classifier.
//!
//! Usage:
//!   handmove classify <FRAMES>   Classify a JSONL frame stream
//!   handmove validate <FRAMES>   Check a frame stream for bad frames
//!   handmove synth <GESTURE>     Generate a synthetic frame stream
//!   handmove config              Show or initialize configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use handmove_common::config::AppConfig;

mod commands;
mod writer;

#[derive(Parser)]
#[command(
    name = "handmove",
    about = "Recognize scroll, zoom, and slide movements from hand landmarks",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/handmove/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every frame of a JSONL frame stream
    Classify {
        /// Path to the frames file
        path: PathBuf,

        /// Write one label record per frame to this JSONL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every frame, not only frames with a recognized movement
        #[arg(long)]
        all: bool,
    },

    /// Report frames that violate the classifier's input contract
    Validate {
        /// Path to the frames file
        path: PathBuf,
    },

    /// Generate a synthetic frame stream for one gesture
    Synth {
        /// Gesture: idle, scroll-right, scroll-up, scroll-left, scroll-down,
        /// zoom-in, zoom-out, slide-left, slide-right
        gesture: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of movement steps (frames = steps + 1)
        #[arg(long, default_value = "10")]
        steps: usize,

        /// Frame rate used for timestamps
        #[arg(long, default_value = "30")]
        fps: u32,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path)
            if !path.exists() && matches!(cli.command, Commands::Config { init: true, .. }) =>
        {
            AppConfig::default()
        }
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    logging.json |= cli.json_logs;
    handmove_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Classify { path, output, all } => {
            commands::classify::run(path, output, all, config.gesture)
        }
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Synth {
            gesture,
            output,
            steps,
            fps,
        } => commands::synth::run(gesture, output, steps, fps),
        Commands::Config { init, force } => commands::config::run(config, cli.config, init, force),
    }
}
