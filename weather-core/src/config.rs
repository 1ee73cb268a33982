use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};

/// API key WeatherAPI.com accepts for unauthenticated demo queries.
pub const DEMO_API_KEY: &str = "demo";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_VIACEP_URL: &str = "https://viacep.com.br";
pub const DEFAULT_WEATHER_API_URL: &str = "http://api.weatherapi.com";

/// Process-wide settings, fixed at startup and handed to the clients that
/// need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    /// Raw value; validated by [`Config::socket_addr`].
    pub port: String,
    pub weather_api_key: String,
    pub viacep_base_url: String,
    pub weather_api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            weather_api_key: DEMO_API_KEY.to_string(),
            viacep_base_url: DEFAULT_VIACEP_URL.to_string(),
            weather_api_base_url: DEFAULT_WEATHER_API_URL.to_string(),
        }
    }
}

impl Config {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.weather_api_key = api_key.into();
        self
    }

    /// Point both upstream clients somewhere else, e.g. a local mock server.
    pub fn with_base_urls(
        mut self,
        viacep_base_url: impl Into<String>,
        weather_api_base_url: impl Into<String>,
    ) -> Self {
        self.viacep_base_url = viacep_base_url.into();
        self.weather_api_base_url = weather_api_base_url.into();
        self
    }

    /// True when no real key was supplied and the demo placeholder is in use.
    pub fn uses_demo_key(&self) -> bool {
        self.weather_api_key == DEMO_API_KEY
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let port: u16 = self
            .port
            .trim()
            .parse()
            .with_context(|| format!("Invalid port '{}'", self.port))?;

        // Accepts IPv6 hosts bare (`::`) or bracketed (`[::1]`).
        let host = self.host.trim();
        let ip: IpAddr = host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse()
            .with_context(|| format!("Invalid listen host '{host}'"))?;

        Ok(SocketAddr::new(ip, port))
    }
}
