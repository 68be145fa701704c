//! Query source contract and the fetch error taxonomy.
//!
//! A query source is the remote side of one domain: it derives a request
//! from the domain's parameters, executes it, and returns either a
//! normalized result or a classified [`FetchError`]. Everything downstream
//! (controller, view state, presentation) only ever sees these two shapes;
//! raw payload checking never leaks past the adapter boundary.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

/// Failure classification for a query attempt.
///
/// The distinctions matter to the user: transport and provider failures
/// suggest retrying identically, an empty result suggests refining the
/// query, and an input failure never reached the network at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Network failure or non-success HTTP status.
    Transport,
    /// HTTP success, but the payload itself reports a failure.
    Provider,
    /// HTTP success, no provider error, but required fields are missing.
    Shape,
    /// Valid payload with zero matching records.
    EmptyResult,
    /// Local validation failure before any network call.
    Input,
}

/// Structured error surfaced by query sources and controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Provider,
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Shape,
            message: message.into(),
        }
    }

    pub fn empty_result(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::EmptyResult,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Input,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::Provider => "fetch.provider",
            FetchErrorKind::Shape => "fetch.shape",
            FetchErrorKind::EmptyResult => "fetch.empty_result",
            FetchErrorKind::Input => "fetch.input",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

/// Request parameters accepted by a query source.
///
/// `is_blank` lets the controller suppress requests for domains that
/// require non-empty input (a blank book title search is a no-op).
pub trait QueryParams: Clone + Send + Sync + 'static {
    fn is_blank(&self) -> bool {
        false
    }
}

/// One domain's remote collaborator.
///
/// Implementations must be `Send + Sync`; the boxed-future form keeps the
/// trait object-safe so controllers can hold `Arc<dyn QuerySource<_, _>>`.
pub trait QuerySource<P, T>: Send + Sync {
    fn fetch<'a>(
        &'a self,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send + 'a>>;
}
