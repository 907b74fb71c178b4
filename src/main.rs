//! NotifyHub - interactive notification demo
//!
//! Reads menu choices from stdin, prints notices to stdout and diagnostics
//! to stderr.

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use notifyhub::{
    cli::Cli,
    config::Config,
    console::Console,
    hub::NotificationHub,
    notification::ChannelFactory,
    outputs::ConsoleSink,
};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        init_logging("error");
        error!("Failed to load configuration: {}", err);
        std::process::exit(1);
    });

    init_logging(&config.log_level);

    info!("NotifyHub starting up...");
    info!("Log Level: {}", config.log_level);
    info!("Output Format: {}", config.output.format);
    info!("Duplicate Policy: {:?}", config.hub.duplicate_policy);

    let sink = Arc::new(ConsoleSink::new(config.output.format));
    let factory = ChannelFactory::new(sink);
    let hub = NotificationHub::with_policy(config.hub.duplicate_policy);

    let mut console = Console::new(hub, factory, io::stdin().lock(), io::stdout());
    console.run()?;

    info!("Exiting.");
    Ok(())
}
