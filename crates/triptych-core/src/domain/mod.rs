//! Domain types for the three data verticals.

pub mod books;
pub mod currency;
pub mod weather;

pub use books::{BookList, BookRecord, BooksParams};
pub use currency::{CurrencyCode, RateDate, RateTable, RatesParams};
pub use weather::{WeatherParams, WeatherReport};
