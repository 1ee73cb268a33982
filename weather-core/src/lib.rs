//! Core library for the CEP weather service.
//!
//! This crate defines:
//! - Configuration for the service and its upstreams
//! - Postal code validation and temperature unit conversion
//! - Clients for the ViaCEP lookup and WeatherAPI.com services
//! - The pipeline tying them together and its error taxonomy
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod units;
pub mod zipcode;

pub use config::Config;
pub use error::{ServiceError, Stage, WeatherError};
pub use model::{ErrorResponse, TemperatureResponse};
pub use provider::{LocationResolver, TemperatureProvider, ViaCepClient, WeatherApiClient};
pub use service::WeatherService;
pub use zipcode::{ZipCode, is_valid_zipcode};
