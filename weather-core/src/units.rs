//! Celsius conversions used when shaping the response.

/// Single-rounding multiply-add, so 28.5 °C comes out as exactly 83.3 °F.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius.mul_add(1.8, 32.0)
}

/// Uses the 273 offset the service has always reported, not 273.15.
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.0
}
