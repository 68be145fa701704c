//! Per-domain panels: parameter store plus controller wiring.
//!
//! A panel owns the current query parameters for its domain, translates
//! user intents (submit, refresh, use-current-location, field edits)
//! into controller operations, and exposes the tri-state view. One panel
//! instance exists per active domain view; nothing is shared across
//! domains.
//!
//! The refetch asymmetry lives in the controller config, not in the
//! panels: currency parameter edits refetch immediately once the panel
//! is activated, while books and weather wait for an explicit action.

pub mod books;
pub mod currency;
pub mod weather;

pub use books::BooksPanel;
pub use currency::CurrencyPanel;
pub use weather::WeatherPanel;
