use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use marquee_core::{set_default_pause_duration, AppConfig};

mod commands;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "Scrolling marquee text in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (defaults to ~/.config/marquee/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the marquee demo
    Run,
    /// Print the effective configuration
    Config {
        /// Write it to the default config path instead
        #[arg(long)]
        init: bool,
    },
}

/// Command line values that take precedence over the config file
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Text of the main marquee
    #[arg(short, long, global = true)]
    text: Option<String>,

    /// Scroll speed in tenths of a column per frame
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    speed: Option<i32>,

    /// Pause between cycles in milliseconds (0 disables pausing)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pause: Option<i64>,

    /// Process-wide pause for marquees without their own setting
    #[arg(long, global = true, allow_negative_numbers = true)]
    default_pause: Option<i64>,

    /// Fade the text out at the edges
    #[arg(short, long, global = true)]
    edge: bool,

    /// Width of each edge fade in percent of the marquee width
    #[arg(long, global = true)]
    edge_width: Option<u32>,
}

impl Overrides {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(text) = &self.text {
            config.marquee.text = Some(text.clone());
        }
        if let Some(speed) = self.speed {
            config.marquee.speed = speed;
        }
        if let Some(pause) = self.pause {
            config.marquee.pause_duration_ms = Some(pause);
        }
        if self.edge {
            config.marquee.show_edge_effect = true;
        }
        if let Some(width) = self.edge_width {
            config.marquee.edge_effect_width = width;
        }
    }
}

/// Install the global subscriber
///
/// The demo owns the terminal, so logs only go to stderr for commands that don't draw.
fn init_logging(config: &AppConfig, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let file_layer = match config.log_file() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_target(false),
            )
        }
        None => None,
    };

    let stderr_layer = (to_stderr && file_layer.is_none())
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    cli.overrides.apply(&mut config);
    if let Some(path) = cli.log_file {
        config.general.log_file = Some(path);
    }

    let drawing = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, !drawing)?;

    if let Some(ms) = cli.overrides.default_pause {
        set_default_pause_duration(ms);
    }

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Config { init }) => commands::config::run(&config, init),
    }
}
