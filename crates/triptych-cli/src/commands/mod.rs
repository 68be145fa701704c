mod books;
mod rates;
mod weather;

use triptych_core::{BookList, RateTable, ViewState, WeatherReport};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Normalized result of one command, ready for rendering.
pub enum CommandData {
    Rates(RateTable),
    Books(BookList),
    Weather(WeatherReport),
}

pub async fn run(cli: &Cli) -> Result<CommandData, CliError> {
    match &cli.command {
        Command::Rates(args) => rates::run(args).await,
        Command::Books(args) => books::run(args).await,
        Command::Weather(args) => weather::run(args).await,
    }
}

/// Unwrap a terminal view state; any error kind maps to a query failure.
fn into_data<T>(view: ViewState<T>) -> Result<T, CliError> {
    match view {
        ViewState::Data(value) => Ok(value),
        ViewState::Error(message) => Err(CliError::Query(message)),
        // trigger() runs to completion before the view is read.
        ViewState::Loading => Err(CliError::Query(String::from("request did not complete"))),
    }
}
