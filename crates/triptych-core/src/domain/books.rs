use serde::{Deserialize, Serialize};

use crate::source::QueryParams;

/// Maximum number of book records kept from a provider response.
pub const MAX_BOOK_ROWS: usize = 12;

const DEFAULT_SUBJECT: &str = "fiction";

/// Query parameters for the books domain.
///
/// `TopSubject` is the activation default: a fixed subject filter whose
/// results are ranked by edition count. `Title` is an explicit free-text
/// search; a blank title is a blank query and suppresses the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooksParams {
    TopSubject(String),
    Title(String),
}

impl BooksParams {
    pub fn top_fiction() -> Self {
        Self::TopSubject(String::from(DEFAULT_SUBJECT))
    }

    pub fn title(query: impl Into<String>) -> Self {
        Self::Title(query.into().trim().to_owned())
    }

    /// Ranked-by-edition-count mode, as opposed to provider-order search.
    pub const fn is_ranked(&self) -> bool {
        matches!(self, Self::TopSubject(_))
    }
}

impl Default for BooksParams {
    fn default() -> Self {
        Self::top_fiction()
    }
}

impl QueryParams for BooksParams {
    fn is_blank(&self) -> bool {
        match self {
            Self::TopSubject(_) => false,
            Self::Title(query) => query.trim().is_empty(),
        }
    }
}

/// One normalized book record. Author list, publish year, and cover are
/// optional and rendered as omitted fields, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub first_publish_year: Option<i64>,
    pub cover_id: Option<i64>,
    pub edition_count: Option<i64>,
}

impl BookRecord {
    pub fn cover_url(&self) -> Option<String> {
        self.cover_id
            .map(|id| format!("https://covers.openlibrary.org/b/id/{id}-M.jpg"))
    }
}

/// Bounded book result set, at most [`MAX_BOOK_ROWS`] records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<BookRecord>,
}

impl BookList {
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
