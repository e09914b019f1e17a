mod controller;
mod settings;

use std::io;

use anyhow::Context;
use clap::Parser;
use taskkeeper_core::AppBuilder;
use tracing_subscriber::EnvFilter;

use crate::controller::SessionController;
use crate::settings::Cli;

fn init_tracing() {
    // stdout は対話用なのでログは stderr へ
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = settings::load(&cli).context("failed to load configuration")?;
    tracing::debug!(?config, "resolved configuration");

    let app = AppBuilder::from_config(config)
        .build()
        .context("failed to open task store")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    SessionController::new(app, stdin.lock(), stdout.lock())
        .run()
        .context("task manager stopped on a storage error")
}
