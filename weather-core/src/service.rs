use tracing::{debug, info};

use crate::{
    Config, TemperatureResponse, ZipCode,
    error::{ServiceError, Stage},
    provider::{LocationResolver, TemperatureProvider, clients_from_config},
};

/// The postal code to temperature pipeline.
///
/// Each step needs the previous one's output, so the calls are made one
/// after the other: validate, resolve the city, fetch its temperature,
/// convert.
#[derive(Debug)]
pub struct WeatherService {
    resolver: Box<dyn LocationResolver>,
    provider: Box<dyn TemperatureProvider>,
}

impl WeatherService {
    pub fn new(resolver: Box<dyn LocationResolver>, provider: Box<dyn TemperatureProvider>) -> Self {
        Self { resolver, provider }
    }

    /// Service backed by the real ViaCEP and WeatherAPI clients.
    pub fn from_config(config: &Config) -> Self {
        let (resolver, provider) = clients_from_config(config);
        Self::new(Box::new(resolver), Box::new(provider))
    }

    pub async fn temperature_for(&self, raw_zipcode: &str) -> Result<TemperatureResponse, ServiceError> {
        let zipcode =
            ZipCode::parse(raw_zipcode).map_err(|e| ServiceError::new(Stage::Validation, e))?;

        let location = self
            .resolver
            .resolve(&zipcode)
            .await
            .map_err(|e| ServiceError::new(Stage::Lookup, e))?;
        debug!(%zipcode, %location, "resolved zipcode");

        let celsius = self
            .provider
            .current_celsius(&location)
            .await
            .map_err(|e| ServiceError::new(Stage::Weather, e))?;

        info!(%zipcode, %location, celsius, "temperature resolved");
        Ok(TemperatureResponse::from_celsius(celsius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeatherError;
    use async_trait::async_trait;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug)]
    struct FixedResolver(Option<&'static str>);

    #[async_trait]
    impl LocationResolver for FixedResolver {
        async fn resolve(&self, _zipcode: &ZipCode) -> Result<String, WeatherError> {
            self.0.map(str::to_string).ok_or(WeatherError::NotFound)
        }
    }

    #[derive(Debug, Default)]
    struct CountingProvider {
        celsius: Option<f64>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TemperatureProvider for CountingProvider {
        async fn current_celsius(&self, _location: &str) -> Result<f64, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.celsius.ok_or(WeatherError::UpstreamStatus {
                service: "WeatherAPI",
                status: reqwest::StatusCode::BAD_GATEWAY,
            })
        }
    }

    fn service(location: Option<&'static str>, celsius: Option<f64>) -> (WeatherService, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CountingProvider { celsius, calls: calls.clone() };
        (WeatherService::new(Box::new(FixedResolver(location)), Box::new(provider)), calls)
    }

    #[tokio::test]
    async fn resolves_and_converts() {
        let (svc, _) = service(Some("São Paulo"), Some(28.5));

        let resp = svc.temperature_for("01310-100").await.expect("pipeline should succeed");

        assert_eq!(resp, TemperatureResponse { temp_c: 28.5, temp_f: 83.3, temp_k: 301.5 });
    }

    #[tokio::test]
    async fn invalid_zipcode_stops_before_lookup() {
        let (svc, calls) = service(Some("São Paulo"), Some(20.0));

        let err = svc.temperature_for("123").await.unwrap_err();

        assert_eq!(err.stage, Stage::Validation);
        assert!(matches!(err.error, WeatherError::InvalidZipcode(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_zipcode_is_a_lookup_not_found() {
        let (svc, calls) = service(None, Some(20.0));

        let err = svc.temperature_for("99999999").await.unwrap_err();

        assert_eq!(err.stage, Stage::Lookup);
        assert!(err.error.is_not_found());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn weather_failure_is_tagged_with_weather_stage() {
        let (svc, calls) = service(Some("Curitiba"), None);

        let err = svc.temperature_for("80010000").await.unwrap_err();

        assert_eq!(err.stage, Stage::Weather);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
