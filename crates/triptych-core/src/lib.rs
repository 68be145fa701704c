//! # Triptych Core
//!
//! Query controllers, provider adapters, and domain types for the
//! triptych multi-provider data client.
//!
//! ## Overview
//!
//! Three independent data verticals — exchange rates, book search, and
//! current weather — share one architecture: a parameter store feeds a
//! generic query controller, the controller runs the domain's provider
//! adapter, and the outcome drives a tri-state view (`Loading`, `Error`,
//! `Data`). Overlapping requests are resolved by a per-controller
//! generation guard: the last issued request wins and stale completions
//! are discarded.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`controller`] | Generic query controller with generation guard |
//! | [`domain`] | Domain parameters and normalized results |
//! | [`error`] | Local input validation errors |
//! | [`geo`] | Geolocation acquisition for the weather domain |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`panels`] | Per-domain parameter stores and intent wiring |
//! | [`providers`] | Frankfurter, Open Library, weatherstack adapters |
//! | [`source`] | Query source contract and fetch error taxonomy |
//! | [`view`] | Tri-state view model |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use triptych_core::{CurrencyPanel, ReqwestHttpClient, ViewState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let panel = CurrencyPanel::new(Arc::new(ReqwestHttpClient::new()));
//!     panel.activate().await;
//!
//!     match panel.view() {
//!         ViewState::Data(table) => {
//!             for (code, rate) in &table.rates {
//!                 println!("{code} {rate:.4}");
//!             }
//!         }
//!         ViewState::Error(message) => eprintln!("error: {message}"),
//!         ViewState::Loading => unreachable!("trigger ran to completion"),
//!     }
//! }
//! ```

pub mod controller;
pub mod domain;
pub mod error;
pub mod geo;
pub mod http_client;
pub mod panels;
pub mod providers;
pub mod source;
pub mod view;

// Controller types
pub use controller::{ControllerConfig, QueryController, Ticket};

// Domain types
pub use domain::{
    BookList, BookRecord, BooksParams, CurrencyCode, RateDate, RateTable, RatesParams,
    WeatherParams, WeatherReport,
};

// Error types
pub use error::ValidationError;

// Geolocation
pub use geo::{FixedLocator, GeoPoint, LocateError, Locator, UnavailableLocator};

// HTTP transport
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Panels
pub use panels::{BooksPanel, CurrencyPanel, WeatherPanel};

// Provider adapters
pub use providers::{FrankfurterAdapter, OpenLibraryAdapter, WeatherstackAdapter};

// Source contract
pub use source::{FetchError, FetchErrorKind, QueryParams, QuerySource};

// View state
pub use view::ViewState;
