use std::fmt;

use crate::error::WeatherError;

const ZIPCODE_LEN: usize = 8;

/// A Brazilian postal code (CEP) with separators removed.
///
/// Only constructed through [`ZipCode::parse`], so holding one means the
/// value is exactly eight ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(raw: &str) -> Result<Self, WeatherError> {
        let normalized = normalize(raw);
        if is_normalized_valid(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(WeatherError::InvalidZipcode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true iff `raw`, with every hyphen removed, is exactly 8 ASCII digits.
pub fn is_valid_zipcode(raw: &str) -> bool {
    is_normalized_valid(&normalize(raw))
}

fn normalize(raw: &str) -> String {
    raw.replace('-', "")
}

fn is_normalized_valid(code: &str) -> bool {
    code.len() == ZIPCODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}
