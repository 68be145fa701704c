//! CLI argument definitions for triptych.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rates` | Exchange rates for a base currency, latest or as of a date |
//! | `books` | Title search, or the top-fiction ranking with no query |
//! | `weather` | Current conditions for a place name or coordinates |
//!
//! # Examples
//!
//! ```bash
//! triptych rates --base USD --date 2024-01-01
//! triptych books "war and peace"
//! triptych weather Moscow
//! triptych weather --coords 55.75,37.62
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Multi-provider data client: exchange rates, book search, weather.
#[derive(Debug, Parser)]
#[command(name = "triptych", author, version, about)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch exchange rates for a base currency.
    Rates(RatesArgs),
    /// Search books by title, or rank top fiction with no query.
    Books(BooksArgs),
    /// Show current weather conditions.
    Weather(WeatherArgs),
}

#[derive(Debug, Args)]
pub struct RatesArgs {
    /// Base currency code (up to three letters).
    #[arg(long, default_value = "EUR")]
    pub base: String,

    /// As-of date, YYYY-MM-DD or 'latest', no later than today.
    /// Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Debug, Args)]
pub struct BooksArgs {
    /// Title to search for. Omit for the top-fiction ranking.
    pub query: Option<String>,
}

#[derive(Debug, Args)]
pub struct WeatherArgs {
    /// Place name to look up. Defaults to the built-in location.
    pub location: Option<String>,

    /// Coordinate pair 'LAT,LON' instead of a place name.
    #[arg(long, conflicts_with = "location")]
    pub coords: Option<String>,
}
