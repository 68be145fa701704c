use serde::{Deserialize, Serialize};

use crate::source::QueryParams;

/// Activation and retry default for the weather domain.
pub const DEFAULT_LOCATION: &str = "Moscow";

/// Query parameters for the weather domain: a free-text place name or a
/// `"lat,lon"` coordinate pair synthesized from geolocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherParams {
    pub query: String,
}

impl WeatherParams {
    pub fn place(query: impl Into<String>) -> Self {
        Self {
            query: query.into().trim().to_owned(),
        }
    }
}

impl Default for WeatherParams {
    fn default() -> Self {
        Self::place(DEFAULT_LOCATION)
    }
}

impl QueryParams for WeatherParams {}

/// Normalized current-conditions report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub country: String,
    pub local_time: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub pressure_hpa: f64,
    pub visibility_km: f64,
    pub icon_url: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_trims_the_query() {
        assert_eq!(WeatherParams::place(" Oslo ").query, "Oslo");
    }

    #[test]
    fn default_location_is_the_domain_fallback() {
        assert_eq!(WeatherParams::default().query, DEFAULT_LOCATION);
    }
}
