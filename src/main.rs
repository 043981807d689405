//! Real-time hand gesture and Libras letter recognition for game input.

use anyhow::Result;
use clap::Parser;
use libras_sign_input::app::App;
use libras_sign_input::config::Config;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value = "0")]
    cam: i32,

    /// Path to the hand landmark ONNX model
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Path to the Libras letter training dataset (CSV)
    #[arg(short = 's', long)]
    dataset: Option<PathBuf>,

    /// Minimum hand presence score to accept a detection
    #[arg(long)]
    min_confidence: Option<f32>,

    /// Disable the preview window (headless)
    #[arg(long)]
    no_gui: bool,

    /// Disable horizontal mirroring of the camera image
    #[arg(long)]
    no_mirror: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Libras Sign Input");

    // Load configuration if provided, then layer CLI overrides on top
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    config.camera.index = args.cam;
    if args.no_mirror {
        config.camera.mirror = false;
    }
    if let Some(model) = args.model {
        config.models.hand_landmarks = model;
    }
    if let Some(dataset) = args.dataset {
        config.models.dataset = dataset;
    }
    if let Some(min_confidence) = args.min_confidence {
        config.detection.min_confidence = min_confidence;
    }
    if args.no_gui {
        config.display.preview = false;
    }

    let mut app = App::new(&config)?;
    app.run()?;

    Ok(())
}
