use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{WeatherError, ZipCode, model::ViaCepResponse};

use super::{LocationResolver, truncate_body};

const SERVICE: &str = "ViaCEP";

#[derive(Debug, Clone)]
pub struct ViaCepClient {
    base_url: String,
    http: Client,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn lookup_url(&self, zipcode: &ZipCode) -> String {
        format!("{}/ws/{}/json/", self.base_url, zipcode)
    }
}

#[async_trait]
impl LocationResolver for ViaCepClient {
    async fn resolve(&self, zipcode: &ZipCode) -> Result<String, WeatherError> {
        let url = self.lookup_url(zipcode);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| WeatherError::UpstreamTransport { service: SERVICE, source })?;

        // ViaCEP reports unknown codes in the body, so the status is not checked.
        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| WeatherError::UpstreamTransport { service: SERVICE, source })?;

        debug!(%zipcode, %status, body = truncate_body(&body), "ViaCEP responded");

        let parsed: ViaCepResponse = serde_json::from_str(&body)
            .map_err(|source| WeatherError::UpstreamParse { service: SERVICE, source })?;

        if parsed.erro || parsed.localidade.is_empty() {
            return Err(WeatherError::NotFound);
        }

        Ok(parsed.localidade)
    }
}
