use std::sync::{Arc, Mutex};

use crate::controller::{ControllerConfig, QueryController};
use crate::domain::currency::{CurrencyCode, RateDate, RateTable, RatesParams};
use crate::error::ValidationError;
use crate::http_client::HttpClient;
use crate::providers::FrankfurterAdapter;
use crate::view::ViewState;

struct Store {
    params: RatesParams,
    active: bool,
}

/// Currency panel: reactive refetch on every parameter change.
pub struct CurrencyPanel {
    controller: QueryController<RatesParams, RateTable>,
    store: Mutex<Store>,
}

impl CurrencyPanel {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        let source = Arc::new(FrankfurterAdapter::new(http));
        Self {
            controller: QueryController::new(source, ControllerConfig::new(true, false)),
            store: Mutex::new(Store {
                params: RatesParams::default(),
                active: false,
            }),
        }
    }

    pub fn view(&self) -> ViewState<RateTable> {
        self.controller.view()
    }

    pub fn params(&self) -> RatesParams {
        self.lock().params.clone()
    }

    /// Activate the panel and issue the initial fetch with the current
    /// parameters (default: EUR as of today).
    pub async fn activate(&self) {
        let params = {
            let mut store = self.lock();
            store.active = true;
            store.params.clone()
        };
        self.controller.trigger(params).await;
    }

    pub async fn set_base_currency(&self, raw: &str) -> Result<(), ValidationError> {
        let base = CurrencyCode::coerce(raw)?;
        self.update(|params| params.base = base).await;
        Ok(())
    }

    pub async fn set_as_of_date(&self, raw: &str) -> Result<(), ValidationError> {
        let date = RateDate::parse(raw)?;
        self.update(|params| params.date = date).await;
        Ok(())
    }

    /// Re-issue the most recently used request.
    pub async fn refresh(&self) {
        self.controller.retry().await;
    }

    async fn update(&self, apply: impl FnOnce(&mut RatesParams)) {
        let refetch = {
            let mut store = self.lock();
            apply(&mut store.params);
            store.active && self.controller.config().auto_refetch_on_param_change
        };

        if refetch {
            self.controller.trigger(self.params()).await;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
