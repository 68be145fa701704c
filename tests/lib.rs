//! Shared test doubles for the triptych behavioral suites.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use triptych_core::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Scripted transport: replays enqueued responses in order, then falls
/// back to a fixed response. Records every requested URL.
pub struct ScriptedHttpClient {
    queue: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    fallback: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    pub fn always(fallback: Result<HttpResponse, HttpError>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn json(body: &str) -> Self {
        Self::always(Ok(HttpResponse::ok_json(body)))
    }

    pub fn enqueue(&self, response: Result<HttpResponse, HttpError>) {
        self.queue
            .lock()
            .expect("queue should not be poisoned")
            .push_back(response);
    }

    pub fn enqueue_json(&self, body: &str) {
        self.enqueue(Ok(HttpResponse::ok_json(body)));
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requested_urls().len()
    }

    pub fn last_url(&self) -> Option<String> {
        self.requested_urls().last().cloned()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request.url);

        let response = self
            .queue
            .lock()
            .expect("queue should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        Box::pin(async move { response })
    }
}
