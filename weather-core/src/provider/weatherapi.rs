use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::{WeatherError, model::WeatherApiResponse};

use super::{TemperatureProvider, truncate_body};

const SERVICE: &str = "WeatherAPI";

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, api_key: api_key.into(), http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TemperatureProvider for WeatherApiClient {
    async fn current_celsius(&self, location: &str) -> Result<f64, WeatherError> {
        let url = format!("{}/v1/current.json", self.base_url);

        // `query` percent-encodes the location name.
        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(|source| WeatherError::UpstreamTransport { service: SERVICE, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| WeatherError::UpstreamTransport { service: SERVICE, source })?;

        if status != StatusCode::OK {
            warn!(%status, location, body = truncate_body(&body), "WeatherAPI request failed");
            return Err(WeatherError::UpstreamStatus { service: SERVICE, status });
        }

        let parsed: WeatherApiResponse = serde_json::from_str(&body)
            .map_err(|source| WeatherError::UpstreamParse { service: SERVICE, source })?;

        debug!(location, temp_c = parsed.current.temp_c, "WeatherAPI responded");

        Ok(parsed.current.temp_c)
    }
}
