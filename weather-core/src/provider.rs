use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, WeatherError, ZipCode};

pub mod viacep;
pub mod weatherapi;

pub use viacep::ViaCepClient;
pub use weatherapi::WeatherApiClient;

/// Maps a postal code to the name of its municipality.
#[async_trait]
pub trait LocationResolver: Send + Sync + Debug {
    async fn resolve(&self, zipcode: &ZipCode) -> Result<String, WeatherError>;
}

/// Reports the current temperature, in Celsius, for a named location.
#[async_trait]
pub trait TemperatureProvider: Send + Sync + Debug {
    async fn current_celsius(&self, location: &str) -> Result<f64, WeatherError>;
}

/// Construct both upstream clients from config.
pub fn clients_from_config(config: &Config) -> (ViaCepClient, WeatherApiClient) {
    (
        ViaCepClient::new(config.viacep_base_url.clone()),
        WeatherApiClient::new(
            config.weather_api_base_url.clone(),
            config.weather_api_key.clone(),
        ),
    )
}

pub(crate) fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
