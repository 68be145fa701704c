//! Provider adapters: one per domain, each implementing
//! [`QuerySource`](crate::source::QuerySource) over the shared HTTP
//! transport.
//!
//! An adapter does three things: derive the request URL as a pure
//! function of the parameters, execute it, and normalize the raw payload
//! into the domain's bounded result shape. Failure classification
//! happens once here — transport, provider-reported, malformed shape,
//! or empty result — so nothing downstream ever inspects raw payloads.

pub mod frankfurter;
pub mod openlibrary;
pub mod weatherstack;

pub use frankfurter::FrankfurterAdapter;
pub use openlibrary::OpenLibraryAdapter;
pub use weatherstack::WeatherstackAdapter;

use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::source::FetchError;

/// Execute a GET and classify transport-level failures.
pub(crate) async fn execute_get(
    http: &dyn HttpClient,
    url: String,
) -> Result<HttpResponse, FetchError> {
    let response = http
        .execute(HttpRequest::get(url))
        .await
        .map_err(|error| FetchError::transport(format!("request failed: {}", error.message())))?;

    if !response.is_success() {
        return Err(FetchError::transport(format!(
            "provider returned status {}",
            response.status
        )));
    }

    Ok(response)
}
