use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use weather_core::{
    Config, WeatherService,
    config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_VIACEP_URL, DEFAULT_WEATHER_API_URL, DEMO_API_KEY},
};

use crate::routes::{AppState, app_router};

/// Top-level CLI struct. Every flag can also come from the environment.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Current temperature for a Brazilian CEP")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value = DEFAULT_PORT)]
    pub port: String,

    /// WeatherAPI.com key; the demo key only answers a few locations.
    #[arg(long, env = "WEATHER_API_KEY", default_value = DEMO_API_KEY, hide_env_values = true)]
    pub weather_api_key: String,

    /// Base URL of the ViaCEP lookup service.
    #[arg(long, env = "VIACEP_URL", default_value = DEFAULT_VIACEP_URL)]
    pub viacep_url: String,

    /// Base URL of the WeatherAPI.com service.
    #[arg(long, env = "WEATHER_API_URL", default_value = DEFAULT_WEATHER_API_URL)]
    pub weather_api_url: String,
}

impl Cli {
    /// Blank values (e.g. `PORT=` in a `.env` file) fall back to the defaults.
    pub fn config(&self) -> Config {
        Config {
            host: or_default(&self.host, DEFAULT_HOST),
            port: or_default(&self.port, DEFAULT_PORT),
            weather_api_key: or_default(&self.weather_api_key, DEMO_API_KEY),
            viacep_base_url: or_default(&self.viacep_url, DEFAULT_VIACEP_URL),
            weather_api_base_url: or_default(&self.weather_api_url, DEFAULT_WEATHER_API_URL),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        if config.uses_demo_key() {
            warn!("WEATHER_API_KEY not set, falling back to the '{DEMO_API_KEY}' key");
        }

        let addr = config.socket_addr()?;
        let state = AppState::new(Arc::new(WeatherService::from_config(&config)));
        let app = app_router(state);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        info!("Server starting on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")?;

        info!("Server stopped");
        Ok(())
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() { default.to_string() } else { value.to_string() }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
