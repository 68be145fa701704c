use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::books::{BookList, BookRecord, BooksParams, MAX_BOOK_ROWS};
use crate::http_client::HttpClient;
use crate::providers::execute_get;
use crate::source::{FetchError, QuerySource};

const BASE_URL: &str = "https://openlibrary.org";

/// Open Library bibliographic search adapter.
pub struct OpenLibraryAdapter {
    http: Arc<dyn HttpClient>,
}

impl OpenLibraryAdapter {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Request URL as a pure function of the parameters.
    pub fn request_url(params: &BooksParams) -> String {
        match params {
            BooksParams::TopSubject(subject) => {
                format!("{BASE_URL}/search.json?subject={}", urlencoding::encode(subject))
            }
            BooksParams::Title(query) => {
                format!("{BASE_URL}/search.json?title={}", urlencoding::encode(query))
            }
        }
    }
}

impl QuerySource<BooksParams, BookList> for OpenLibraryAdapter {
    fn fetch<'a>(
        &'a self,
        params: BooksParams,
    ) -> Pin<Box<dyn Future<Output = Result<BookList, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            let url = Self::request_url(&params);
            debug!(%url, "searching books");

            let response = execute_get(self.http.as_ref(), url).await?;
            let page: SearchPage = serde_json::from_str(&response.body)
                .map_err(|e| FetchError::shape(format!("malformed search payload: {e}")))?;

            normalize_books(&params, page)
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    docs: Option<Vec<DocRecord>>,
}

#[derive(Debug, Deserialize)]
struct DocRecord {
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    first_publish_year: Option<i64>,
    cover_i: Option<i64>,
    edition_count: Option<i64>,
}

fn normalize_books(params: &BooksParams, page: SearchPage) -> Result<BookList, FetchError> {
    let mut docs = page
        .docs
        .ok_or_else(|| FetchError::shape("search payload is missing the document list"))?;

    if docs.is_empty() {
        return Err(FetchError::empty_result(
            "nothing found, try another query",
        ));
    }

    if params.is_ranked() {
        // Stable sort: ties keep the provider's original order.
        docs.sort_by(|a, b| {
            b.edition_count
                .unwrap_or(0)
                .cmp(&a.edition_count.unwrap_or(0))
        });
    }

    let books = docs
        .into_iter()
        .take(MAX_BOOK_ROWS)
        .map(|doc| BookRecord {
            title: doc.title.unwrap_or_default(),
            authors: doc.author_name,
            first_publish_year: doc.first_publish_year,
            cover_id: doc.cover_i,
            edition_count: doc.edition_count,
        })
        .collect();

    Ok(BookList { books })
}
