//! Behavioral tests for the query controller's tri-state lifecycle and
//! generation guard, driven through a real provider adapter over a
//! scripted transport.

use std::sync::Arc;

use triptych_core::{
    ControllerConfig, CurrencyCode, FetchError, FrankfurterAdapter, QueryController, QuerySource,
    RateDate, RateTable, RatesParams,
};
use triptych_tests::ScriptedHttpClient;

fn params(base: &str) -> RatesParams {
    RatesParams {
        base: CurrencyCode::coerce(base).expect("valid code"),
        date: RateDate::Latest,
    }
}

fn controller(
    http: Arc<ScriptedHttpClient>,
) -> QueryController<RatesParams, RateTable> {
    let adapter = Arc::new(FrankfurterAdapter::new(http));
    QueryController::new(adapter, ControllerConfig::new(true, false))
}

// =============================================================================
// Generation guard: overlapping requests
// =============================================================================

#[tokio::test]
async fn when_two_requests_overlap_only_the_later_outcome_applies() {
    let http = Arc::new(ScriptedHttpClient::json(r#"{"rates": {"USD": 1.09}}"#));
    let adapter = FrankfurterAdapter::new(http.clone());
    let controller = controller(http);

    // Two requests issued before either completes.
    let first = controller.begin(params("EUR")).expect("issued");
    let second = controller.begin(params("USD")).expect("issued");

    let second_outcome = adapter.fetch(params("USD")).await;

    // The earlier response arrives after the later request was issued.
    let stale_applied = controller.complete(
        first,
        Ok(RateTable {
            base: CurrencyCode::coerce("EUR").expect("valid"),
            rates: vec![(String::from("USD"), 9.99)],
        }),
    );
    assert!(!stale_applied, "stale completion must be discarded");
    assert!(
        controller.view().is_loading(),
        "a discarded completion must not clear the current request's loading state"
    );

    assert!(controller.complete(second, second_outcome));
    let table = controller.view().into_data().expect("data state");
    assert_eq!(table.rates, vec![(String::from("USD"), 1.09)]);
}

#[tokio::test]
async fn when_completions_arrive_in_order_both_requests_resolve_normally() {
    let http = Arc::new(ScriptedHttpClient::json(r#"{"rates": {"GBP": 0.85}}"#));
    let adapter = FrankfurterAdapter::new(http.clone());
    let controller = controller(http);

    let first = controller.begin(params("EUR")).expect("issued");
    let outcome = adapter.fetch(params("EUR")).await;
    assert!(controller.complete(first, outcome));
    assert!(controller.view().data().is_some());

    let second = controller.begin(params("USD")).expect("issued");
    assert!(controller.view().is_loading(), "new request re-enters loading");
    let outcome = adapter.fetch(params("USD")).await;
    assert!(controller.complete(second, outcome));
    assert!(controller.view().data().is_some());
}

#[tokio::test]
async fn when_a_local_rejection_lands_an_in_flight_response_cannot_overwrite_it() {
    let http = Arc::new(ScriptedHttpClient::json(r#"{"rates": {"USD": 1.09}}"#));
    let adapter = FrankfurterAdapter::new(http.clone());
    let controller = controller(http);

    let in_flight = controller.begin(params("EUR")).expect("issued");
    let late_outcome = adapter.fetch(params("EUR")).await;

    controller.reject(FetchError::input("location unavailable"));

    assert!(!controller.complete(in_flight, late_outcome));
    assert_eq!(
        controller.view().error_message(),
        Some("location unavailable")
    );
}

// =============================================================================
// Tri-state lifecycle
// =============================================================================

#[tokio::test]
async fn when_the_transport_fails_the_error_state_clears_loading() {
    let http = Arc::new(ScriptedHttpClient::always(Err(
        triptych_core::HttpError::new("connection failed: refused"),
    )));
    let controller = controller(http);

    assert!(controller.trigger(params("EUR")).await);

    let view = controller.view();
    assert!(!view.is_loading(), "a terminal outcome always clears loading");
    let message = view.error_message().expect("error state");
    assert!(message.contains("connection failed"), "got: {message}");
}

#[tokio::test]
async fn when_retrying_the_last_parameters_are_reused() {
    let http = Arc::new(ScriptedHttpClient::json(r#"{"rates": {"JPY": 161.2}}"#));
    let controller = controller(http.clone());

    assert!(controller.trigger(params("USD")).await);
    assert!(controller.retry().await);

    let urls = http.requested_urls();
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0], urls[1], "retry re-issues the same descriptor");
    assert!(urls[1].contains("from=USD"));
}

#[tokio::test]
async fn identical_triggers_against_the_same_backend_state_yield_identical_results() {
    let http = Arc::new(ScriptedHttpClient::json(
        r#"{"rates": {"EUR": 0.9123, "GBP": 0.7850}}"#,
    ));
    let controller = controller(http);

    assert!(controller.trigger(params("USD")).await);
    let first = controller.view().into_data().expect("data state");

    assert!(controller.trigger(params("USD")).await);
    let second = controller.view().into_data().expect("data state");

    assert_eq!(first, second);
}
