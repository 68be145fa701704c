use std::sync::Arc;

use crate::controller::{ControllerConfig, QueryController};
use crate::domain::books::{BookList, BooksParams};
use crate::http_client::HttpClient;
use crate::providers::OpenLibraryAdapter;
use crate::source::QueryParams;
use crate::view::ViewState;

/// Books panel: explicit-action refetch, blank queries suppressed.
pub struct BooksPanel {
    controller: QueryController<BooksParams, BookList>,
}

impl BooksPanel {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        let source = Arc::new(OpenLibraryAdapter::new(http));
        Self {
            controller: QueryController::new(source, ControllerConfig::new(false, true)),
        }
    }

    pub fn view(&self) -> ViewState<BookList> {
        self.controller.view()
    }

    /// Activate the panel: fetch the fixed top-fiction ranking.
    pub async fn activate(&self) {
        self.controller.trigger(BooksParams::top_fiction()).await;
    }

    /// Title search. A blank query is a no-op: no state transition, no
    /// network call, previously loaded results stay on screen.
    pub async fn submit_query(&self, text: &str) -> bool {
        let params = BooksParams::title(text);
        if params.is_blank() {
            return false;
        }
        self.controller.trigger(params).await
    }

    /// Re-issue the most recently used request (top ranking or the last
    /// title search).
    pub async fn refresh(&self) {
        self.controller.retry().await;
    }
}
