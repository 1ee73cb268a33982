use serde::{Deserialize, Deserializer, Serialize};

use crate::units::{celsius_to_fahrenheit, celsius_to_kelvin};

/// Body of a successful `/weather/{cep}` response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResponse {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl TemperatureResponse {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            temp_c: celsius,
            temp_f: celsius_to_fahrenheit(celsius),
            temp_k: celsius_to_kelvin(celsius),
        }
    }
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// ViaCEP lookup payload. Unknown codes come back as `{"erro": true}`.
///
/// Absent and `null` fields both read as empty, which the client treats as
/// "not found".
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ViaCepResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub localidade: String,
    #[serde(default, deserialize_with = "truthy")]
    pub erro: bool,
}

/// WeatherAPI.com `current.json` payload, reduced to what we read.
#[derive(Debug, Deserialize)]
pub(crate) struct WeatherApiResponse {
    pub current: WeatherApiCurrent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherApiCurrent {
    pub temp_c: f64,
}

// ViaCEP has answered both `"erro": true` and `"erro": "true"` over time.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Text(s)) => s.eq_ignore_ascii_case("true"),
        None => false,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
