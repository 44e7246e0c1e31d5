use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use formwright_forms::{ConfigLoadError, FormsConfig, NavigationContext};
use tokio::sync::mpsc;
use tracing::{debug, info};

use formwright_cli::logging::{default_filter, init_logging};
use formwright_cli::{Demo, TerminalHost, TerminalPlayer};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enables debug mode
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write logs to the data directory
    #[arg(long)]
    log_file: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn create_default_config(path: &Path) -> anyhow::Result<()> {
    // Never overwrite an existing config file
    if path.exists() {
        bail!(
            "Config file already exists at {}. Edit it or delete it to create a new one.",
            path.display()
        );
    }

    FormsConfig::default().save_to(path)?;
    eprintln!("Config file created at: {}", path.display());
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<FormsConfig> {
    match FormsConfig::load_from(path) {
        Ok(config) => Ok(config),
        Err(ConfigLoadError::NotFound(_)) => {
            info!("No config at {}, using defaults", path.display());
            Ok(FormsConfig::default())
        }
        Err(err) => Err(err).context("Failed to load config"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = init_logging("forms-demo", cli.log_file, default_filter(cli.debug))?;

    let config_path = match cli.config {
        Some(path) => path,
        None => FormsConfig::config_path()?,
    };

    if cli.init_config {
        return create_default_config(&config_path);
    }

    let config = load_config(&config_path)?;
    debug!("Using config {:?}", config);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let events = tokio::spawn(async move {
        let mut count = 0;
        while let Some(event) = event_rx.recv().await {
            debug!(target: "forms", "{:?}", event);
            count += 1;
        }
        count
    });

    let navigation = NavigationContext::with_config(config).with_events(event_tx);
    let demo = Demo::new(navigation);
    demo.run::<TerminalHost>(&TerminalPlayer::stdio()).await?;

    let profile = demo.profile();
    // Closes the event channel so the logger task finishes
    drop(demo);
    let count = events.await?;
    info!("Session ended after {} form events", count);
    println!("Final profile: {:?}", profile);

    Ok(())
}
