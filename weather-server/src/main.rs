//! Binary crate for the `weather-server` HTTP service.
//!
//! This crate focuses on:
//! - Reading configuration from flags, the environment and an optional `.env`
//! - Logging setup
//! - HTTP routing and turning pipeline failures into status codes

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before clap reads the environment.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = dotenv {
        tracing::warn!("No .env file loaded ({e}), using process environment only");
    }

    let cmd = cli::Cli::parse();
    cmd.run().await
}
