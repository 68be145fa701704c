//! Generic query controller: the tri-state lifecycle driver.
//!
//! One controller instance serves one domain. It derives a request from
//! the given parameters, runs it against the domain's [`QuerySource`],
//! and transitions the [`ViewState`] through `Loading` → `Data`/`Error`.
//!
//! Overlapping requests are resolved by a generation guard: `begin`
//! increments a per-controller counter and hands the captured value back
//! as a [`Ticket`]; `complete` applies an outcome only while its ticket
//! is still current. A slow earlier response can therefore never
//! overwrite a later request's outcome or its `Loading` state — last
//! request wins, stale completions are discarded without any mutation.
//!
//! The transition primitives (`begin`, `complete`, `reject`) are public
//! so race behavior is directly testable; `trigger` and `retry` compose
//! them for callers, and the panels layer activation on top.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::source::{FetchError, QueryParams, QuerySource};
use crate::view::ViewState;

/// Per-domain behavior switches.
///
/// The three domains share one controller implementation; the flags
/// carry the deliberate asymmetries between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Parameter changes refetch immediately (currency) instead of
    /// waiting for an explicit user action (books, weather).
    pub auto_refetch_on_param_change: bool,
    /// Blank parameters make `begin` a no-op (books title search).
    pub requires_non_empty_query: bool,
}

impl ControllerConfig {
    pub const fn new(auto_refetch_on_param_change: bool, requires_non_empty_query: bool) -> Self {
        Self {
            auto_refetch_on_param_change,
            requires_non_empty_query,
        }
    }
}

/// Capture of the generation counter at issue time.
///
/// Deliberately not `Clone`: one issued request, one completion.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

struct Inner<P, T> {
    generation: u64,
    view: ViewState<T>,
    last_params: Option<P>,
}

/// Tri-state lifecycle driver for one domain.
pub struct QueryController<P, T> {
    source: Arc<dyn QuerySource<P, T>>,
    config: ControllerConfig,
    inner: Mutex<Inner<P, T>>,
}

impl<P, T> QueryController<P, T>
where
    P: QueryParams,
    T: Clone + Send + 'static,
{
    pub fn new(source: Arc<dyn QuerySource<P, T>>, config: ControllerConfig) -> Self {
        Self {
            source,
            config,
            inner: Mutex::new(Inner {
                generation: 0,
                view: ViewState::Loading,
                last_params: None,
            }),
        }
    }

    pub const fn config(&self) -> ControllerConfig {
        self.config
    }

    /// Current view state snapshot.
    pub fn view(&self) -> ViewState<T> {
        self.lock().view.clone()
    }

    /// Parameters of the most recently issued request, if any.
    pub fn last_params(&self) -> Option<P> {
        self.lock().last_params.clone()
    }

    /// Issue a new request: bump the generation, remember the params for
    /// retry, and enter `Loading`.
    ///
    /// Returns `None` without any state transition when the domain
    /// requires non-empty input and `params` is blank.
    pub fn begin(&self, params: P) -> Option<Ticket> {
        if self.config.requires_non_empty_query && params.is_blank() {
            debug!("blank query suppressed; no request issued");
            return None;
        }

        let mut inner = self.lock();
        inner.generation += 1;
        inner.view = ViewState::Loading;
        inner.last_params = Some(params);
        Some(Ticket {
            generation: inner.generation,
        })
    }

    /// Apply a request outcome, unless a newer request has been issued
    /// since the ticket was handed out.
    ///
    /// Returns whether the outcome was applied. A stale completion is
    /// discarded silently: it neither sets data nor clears the current
    /// request's `Loading` state.
    pub fn complete(&self, ticket: Ticket, outcome: Result<T, FetchError>) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.generation {
            debug!(
                stale = ticket.generation,
                current = inner.generation,
                "discarding stale completion"
            );
            return false;
        }

        inner.view = match outcome {
            Ok(result) => ViewState::Data(result),
            Err(error) => {
                debug!(code = error.code(), "request failed: {}", error.message());
                ViewState::Error(error.message().to_owned())
            }
        };
        true
    }

    /// Fail locally without issuing a request (geolocation denied, blank
    /// required input). Bumps the generation so an in-flight response
    /// cannot later overwrite the error.
    pub fn reject(&self, error: FetchError) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.view = ViewState::Error(error.message().to_owned());
    }

    /// Issue a request and run it to completion against the source.
    ///
    /// Returns whether a request was issued at all (blank-query
    /// suppression returns `false`).
    pub async fn trigger(&self, params: P) -> bool {
        let Some(ticket) = self.begin(params.clone()) else {
            return false;
        };

        let outcome = self.source.fetch(params).await;
        self.complete(ticket, outcome);
        true
    }

    /// Re-issue the most recently used parameters. No-op when nothing
    /// has been requested yet.
    pub async fn retry(&self) -> bool {
        let Some(params) = self.last_params() else {
            return false;
        };
        self.trigger(params).await
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<P, T>> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
