//! Contract tests for the three provider adapters: request descriptors
//! are pure functions of the parameters, and payload classification
//! matches each provider's documented failure modes.

use std::sync::Arc;

use triptych_core::{
    BooksParams, CurrencyCode, FetchErrorKind, FrankfurterAdapter, HttpResponse,
    OpenLibraryAdapter, QuerySource, RateDate, RatesParams, WeatherParams, WeatherstackAdapter,
};
use triptych_tests::ScriptedHttpClient;

fn rates_params(base: &str, date: RateDate) -> RatesParams {
    RatesParams {
        base: CurrencyCode::coerce(base).expect("valid code"),
        date,
    }
}

// =============================================================================
// Request descriptors
// =============================================================================

#[test]
fn request_urls_are_deterministic_functions_of_the_parameters() {
    let params = rates_params("USD", RateDate::parse("2024-01-01").expect("valid"));
    assert_eq!(
        FrankfurterAdapter::request_url(&params),
        FrankfurterAdapter::request_url(&params.clone())
    );

    let books = BooksParams::title("crime & punishment");
    assert_eq!(
        OpenLibraryAdapter::request_url(&books),
        "https://openlibrary.org/search.json?title=crime%20%26%20punishment"
    );

    let adapter = WeatherstackAdapter::with_access_key(
        Arc::new(ScriptedHttpClient::json("{}")),
        "key",
    );
    assert_eq!(
        adapter.request_url(&WeatherParams::place("São Paulo")),
        "https://api.weatherstack.com/current?access_key=key&query=S%C3%A3o%20Paulo&units=m"
    );
}

// =============================================================================
// Frankfurter
// =============================================================================

#[tokio::test]
async fn frankfurter_normalizes_rates_in_provider_order() {
    let http = Arc::new(ScriptedHttpClient::json(
        r#"{"rates": {"EUR": 0.9123, "GBP": 0.7850}}"#,
    ));
    let adapter = FrankfurterAdapter::new(http);

    let table = adapter
        .fetch(rates_params(
            "USD",
            RateDate::parse("2024-01-01").expect("valid"),
        ))
        .await
        .expect("normalizes");

    assert_eq!(
        table.rates,
        vec![
            (String::from("EUR"), 0.9123),
            (String::from("GBP"), 0.7850)
        ]
    );
}

#[tokio::test]
async fn frankfurter_http_failure_is_a_transport_error() {
    let http = Arc::new(ScriptedHttpClient::always(Ok(HttpResponse {
        status: 404,
        body: String::from("not found"),
    })));
    let adapter = FrankfurterAdapter::new(http);

    let error = adapter
        .fetch(rates_params("XXX", RateDate::Latest))
        .await
        .expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::Transport);
    assert!(error.message().contains("404"), "got: {}", error.message());
}

#[tokio::test]
async fn frankfurter_unparseable_body_is_a_shape_error() {
    let http = Arc::new(ScriptedHttpClient::json("not json"));
    let adapter = FrankfurterAdapter::new(http);

    let error = adapter
        .fetch(rates_params("EUR", RateDate::Latest))
        .await
        .expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::Shape);
}

// =============================================================================
// Open Library
// =============================================================================

#[tokio::test]
async fn openlibrary_missing_docs_is_a_shape_error() {
    let http = Arc::new(ScriptedHttpClient::json(r#"{"numFound": 3}"#));
    let adapter = OpenLibraryAdapter::new(http);

    let error = adapter
        .fetch(BooksParams::top_fiction())
        .await
        .expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::Shape);
}

#[tokio::test]
async fn openlibrary_zero_docs_is_an_empty_result_error() {
    let http = Arc::new(ScriptedHttpClient::json(r#"{"docs": []}"#));
    let adapter = OpenLibraryAdapter::new(http);

    let error = adapter
        .fetch(BooksParams::title("xyzzy"))
        .await
        .expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::EmptyResult);
}

// =============================================================================
// weatherstack
// =============================================================================

#[tokio::test]
async fn weatherstack_error_body_with_http_200_is_a_provider_error() {
    let http = Arc::new(ScriptedHttpClient::json(
        r#"{"success": false, "error": {"code": 615, "info": "query failed"}}"#,
    ));
    let adapter = WeatherstackAdapter::with_access_key(http, "key");

    let error = adapter
        .fetch(WeatherParams::place("Moscow"))
        .await
        .expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::Provider);
    assert_eq!(error.message(), "query failed");
}

#[tokio::test]
async fn weatherstack_missing_sections_is_a_shape_error() {
    let http = Arc::new(ScriptedHttpClient::json(r#"{"request": {}}"#));
    let adapter = WeatherstackAdapter::with_access_key(http, "key");

    let error = adapter
        .fetch(WeatherParams::place("Moscow"))
        .await
        .expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::Shape);
}
