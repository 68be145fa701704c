use std::sync::Arc;

use crate::controller::{ControllerConfig, QueryController};
use crate::domain::weather::{WeatherParams, WeatherReport};
use crate::geo::Locator;
use crate::http_client::HttpClient;
use crate::providers::WeatherstackAdapter;
use crate::source::FetchError;
use crate::view::ViewState;

/// Weather panel: explicit-action refetch, geolocation side entry.
pub struct WeatherPanel {
    controller: QueryController<WeatherParams, WeatherReport>,
}

impl WeatherPanel {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_adapter(WeatherstackAdapter::new(http))
    }

    pub fn with_adapter(adapter: WeatherstackAdapter) -> Self {
        Self {
            controller: QueryController::new(
                Arc::new(adapter),
                ControllerConfig::new(false, false),
            ),
        }
    }

    pub fn view(&self) -> ViewState<WeatherReport> {
        self.controller.view()
    }

    /// Activate the panel: fetch conditions for the default location.
    pub async fn activate(&self) {
        self.controller.trigger(WeatherParams::default()).await;
    }

    /// Free-text location search. A blank input is a local input error,
    /// surfaced without any network call.
    pub async fn submit_location(&self, text: &str) {
        let params = WeatherParams::place(text);
        if params.query.is_empty() {
            self.controller
                .reject(FetchError::input("please enter a city name"));
            return;
        }
        self.controller.trigger(params).await;
    }

    /// Resolve the user's coordinates and query them as `"lat,lon"`.
    /// Location failure surfaces as an error without a network call and
    /// invalidates any in-flight request.
    pub async fn use_current_location(&self, locator: &dyn Locator) {
        match locator.locate().await {
            Ok(point) => {
                self.controller
                    .trigger(WeatherParams::place(point.as_query()))
                    .await;
            }
            Err(_) => {
                self.controller
                    .reject(FetchError::input("location unavailable"));
            }
        }
    }

    /// Retry always falls back to the domain default location, not the
    /// last-attempted query.
    pub async fn refresh(&self) {
        self.controller.trigger(WeatherParams::default()).await;
    }
}
