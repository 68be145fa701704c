use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::currency::{RateTable, RatesParams, MAX_RATE_ROWS};
use crate::http_client::HttpClient;
use crate::providers::execute_get;
use crate::source::{FetchError, QuerySource};

const BASE_URL: &str = "https://api.frankfurter.app";

/// Frankfurter foreign-exchange rates adapter.
pub struct FrankfurterAdapter {
    http: Arc<dyn HttpClient>,
}

impl FrankfurterAdapter {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Request URL as a pure function of the parameters.
    pub fn request_url(params: &RatesParams) -> String {
        format!(
            "{BASE_URL}/{}?from={}",
            params.date.as_path_segment(),
            params.base.as_str()
        )
    }
}

impl QuerySource<RatesParams, RateTable> for FrankfurterAdapter {
    fn fetch<'a>(
        &'a self,
        params: RatesParams,
    ) -> Pin<Box<dyn Future<Output = Result<RateTable, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            let url = Self::request_url(&params);
            debug!(%url, "fetching exchange rates");

            let response = execute_get(self.http.as_ref(), url).await?;
            let page: RatesPage = serde_json::from_str(&response.body)
                .map_err(|e| FetchError::shape(format!("malformed rates payload: {e}")))?;

            normalize_rates(params, page)
        })
    }
}

#[derive(Debug, Deserialize)]
struct RatesPage {
    // serde_json's preserve_order keeps the provider's own ordering.
    rates: Option<serde_json::Map<String, serde_json::Value>>,
}

fn normalize_rates(params: RatesParams, page: RatesPage) -> Result<RateTable, FetchError> {
    let raw = page
        .rates
        .ok_or_else(|| FetchError::shape("rates payload is missing the rates mapping"))?;

    let mut rates = Vec::with_capacity(raw.len().min(MAX_RATE_ROWS));
    for (code, value) in raw {
        if rates.len() == MAX_RATE_ROWS {
            break;
        }
        let rate = value
            .as_f64()
            .ok_or_else(|| FetchError::shape(format!("rate for '{code}' is not a number")))?;
        rates.push((code, rate));
    }

    Ok(RateTable {
        base: params.base,
        rates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::{CurrencyCode, RateDate};

    fn params(base: &str, date: RateDate) -> RatesParams {
        RatesParams {
            base: CurrencyCode::coerce(base).expect("valid code"),
            date,
        }
    }

    #[test]
    fn url_uses_the_date_path_segment() {
        let on_date = params("USD", RateDate::parse("2024-01-01").expect("valid"));
        assert_eq!(
            FrankfurterAdapter::request_url(&on_date),
            "https://api.frankfurter.app/2024-01-01?from=USD"
        );

        let latest = params("EUR", RateDate::Latest);
        assert_eq!(
            FrankfurterAdapter::request_url(&latest),
            "https://api.frankfurter.app/latest?from=EUR"
        );
    }

    #[test]
    fn normalize_keeps_provider_order() {
        let page: RatesPage =
            serde_json::from_str(r#"{"rates": {"EUR": 0.9123, "GBP": 0.7850}}"#).expect("parses");
        let table =
            normalize_rates(params("USD", RateDate::Latest), page).expect("normalizes");

        assert_eq!(table.base.as_str(), "USD");
        assert_eq!(
            table.rates,
            vec![
                (String::from("EUR"), 0.9123),
                (String::from("GBP"), 0.7850)
            ]
        );
    }

    #[test]
    fn normalize_truncates_to_the_row_bound() {
        let entries = (0..60)
            .map(|i| format!("\"C{i:02}\": 1.{i:02}"))
            .collect::<Vec<_>>()
            .join(", ");
        let page: RatesPage =
            serde_json::from_str(&format!("{{\"rates\": {{{entries}}}}}")).expect("parses");

        let table = normalize_rates(params("EUR", RateDate::Latest), page).expect("normalizes");
        assert_eq!(table.len(), MAX_RATE_ROWS);
        assert_eq!(table.rates[0].0, "C00");
    }

    #[test]
    fn missing_rates_mapping_is_a_shape_error() {
        let page: RatesPage = serde_json::from_str(r#"{"amount": 1.0}"#).expect("parses");
        let error =
            normalize_rates(params("EUR", RateDate::Latest), page).expect_err("must fail");
        assert_eq!(error.code(), "fetch.shape");
    }

    #[test]
    fn empty_mapping_is_valid_data() {
        let page: RatesPage = serde_json::from_str(r#"{"rates": {}}"#).expect("parses");
        let table = normalize_rates(params("EUR", RateDate::Latest), page).expect("normalizes");
        assert!(table.is_empty());
    }
}
