//! Length units expressed in meters
//!
//! Multiply to convert into meters, e.g. `500.0 * MI`.

/// Meters
pub const M: f64 = 1.0;
/// Kilometers
pub const KM: f64 = 1000.0;
/// International nautical miles
pub const NM: f64 = 1852.0;
/// International feet
pub const FT: f64 = 0.3048;
/// Statute miles
pub const MI: f64 = 1609.344;
