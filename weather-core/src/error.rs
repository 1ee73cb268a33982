use reqwest::StatusCode;
use thiserror::Error;

/// Failures that can occur while answering a temperature request.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("invalid zipcode: {0:?}")]
    InvalidZipcode(String),

    #[error("zipcode not found")]
    NotFound,

    #[error("failed to reach {service}")]
    UpstreamTransport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned status {status}")]
    UpstreamStatus {
        service: &'static str,
        status: StatusCode,
    },

    #[error("failed to parse {service} response")]
    UpstreamParse {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize response")]
    Serialization(#[from] serde_json::Error),
}

impl WeatherError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound)
    }
}

/// Step of the request pipeline a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validation,
    Lookup,
    Weather,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stage::Validation => "validation",
            Stage::Lookup => "lookup",
            Stage::Weather => "weather",
        })
    }
}

/// A [`WeatherError`] tagged with the pipeline stage that produced it.
///
/// Both upstream clients share the same error kinds, so the stage is what
/// tells a transport failure talking to ViaCEP apart from one talking to
/// WeatherAPI.
#[derive(Debug, Error)]
#[error("{stage} failed: {error}")]
pub struct ServiceError {
    pub stage: Stage,
    #[source]
    pub error: WeatherError,
}

impl ServiceError {
    pub fn new(stage: Stage, error: WeatherError) -> Self {
        Self { stage, error }
    }
}
