//! Alert sender CLI
//!
//! Composes an alert for a notification batch and writes it to stdout.

use std::path::PathBuf;

use alert_sender::{load_batch, load_config, Config};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "alert-sender")]
#[command(about = "Compose bounded-length alerts from trigger events")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the notification batch (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Title limit in characters (overrides config file)
    #[arg(long)]
    title_limit: Option<usize>,

    /// Body limit in characters, negative for unlimited (overrides config file)
    #[arg(long, allow_hyphen_values = true)]
    body_limit: Option<i64>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, input={:?}, log_level={:?}",
        args.config,
        args.input,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(title_limit) = args.title_limit {
        config.channel.title_limit = title_limit;
    }
    if let Some(body_limit) = args.body_limit {
        config.channel.body_limit = body_limit;
    }

    let batch = load_batch(&args.input)?;

    tracing::info!("Starting alert sender");
    alert_sender::run(config, batch).await?;

    Ok(())
}
