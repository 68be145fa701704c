use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::weather::{WeatherParams, WeatherReport};
use crate::http_client::HttpClient;
use crate::providers::execute_get;
use crate::source::{FetchError, QuerySource};

const BASE_URL: &str = "https://api.weatherstack.com";

/// weatherstack current-conditions adapter.
///
/// The provider reports its own failures inside an HTTP 200 body (bad
/// access key, unknown location), so normalization distinguishes a
/// provider-reported error from a malformed payload.
pub struct WeatherstackAdapter {
    http: Arc<dyn HttpClient>,
    access_key: String,
}

impl WeatherstackAdapter {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        let access_key = std::env::var("TRIPTYCH_WEATHERSTACK_API_KEY")
            .unwrap_or_else(|_| String::from("demo"));
        Self::with_access_key(http, access_key)
    }

    pub fn with_access_key(http: Arc<dyn HttpClient>, access_key: impl Into<String>) -> Self {
        Self {
            http,
            access_key: access_key.into(),
        }
    }

    /// Request URL as a pure function of the parameters.
    pub fn request_url(&self, params: &WeatherParams) -> String {
        format!(
            "{BASE_URL}/current?access_key={}&query={}&units=m",
            self.access_key,
            urlencoding::encode(&params.query)
        )
    }
}

impl QuerySource<WeatherParams, WeatherReport> for WeatherstackAdapter {
    fn fetch<'a>(
        &'a self,
        params: WeatherParams,
    ) -> Pin<Box<dyn Future<Output = Result<WeatherReport, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.request_url(&params);
            debug!(query = %params.query, "fetching current conditions");

            let response = execute_get(self.http.as_ref(), url).await?;
            let page: CurrentConditionsPage = serde_json::from_str(&response.body)
                .map_err(|e| FetchError::shape(format!("malformed weather payload: {e}")))?;

            normalize_report(page)
        })
    }
}

#[derive(Debug, Deserialize)]
struct CurrentConditionsPage {
    error: Option<ProviderFault>,
    location: Option<LocationBlock>,
    current: Option<CurrentBlock>,
}

#[derive(Debug, Deserialize)]
struct ProviderFault {
    info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocationBlock {
    name: String,
    country: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature: f64,
    feelslike: f64,
    humidity: f64,
    wind_speed: f64,
    pressure: f64,
    visibility: f64,
    #[serde(default)]
    weather_icons: Vec<String>,
    #[serde(default)]
    weather_descriptions: Vec<String>,
}

fn normalize_report(page: CurrentConditionsPage) -> Result<WeatherReport, FetchError> {
    if let Some(fault) = page.error {
        let info = fault
            .info
            .unwrap_or_else(|| String::from("provider reported an error"));
        return Err(FetchError::provider(info));
    }

    let (location, current) = match (page.location, page.current) {
        (Some(location), Some(current)) => (location, current),
        _ => {
            return Err(FetchError::shape(
                "weather payload is missing the location or current section",
            ))
        }
    };

    Ok(WeatherReport {
        location_name: location.name,
        country: location.country,
        local_time: location.localtime,
        temperature_c: current.temperature,
        feels_like_c: current.feelslike,
        humidity_pct: current.humidity,
        wind_speed_kmh: current.wind_speed,
        pressure_hpa: current.pressure,
        visibility_km: current.visibility,
        icon_url: current.weather_icons.into_iter().next(),
        description: current.weather_descriptions.into_iter().next(),
    })
}
