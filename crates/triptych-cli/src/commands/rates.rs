use std::sync::Arc;

use triptych_core::{CurrencyPanel, ReqwestHttpClient};

use crate::cli::RatesArgs;
use crate::error::CliError;

use super::{into_data, CommandData};

pub async fn run(args: &RatesArgs) -> Result<CommandData, CliError> {
    let panel = CurrencyPanel::new(Arc::new(ReqwestHttpClient::new()));

    // Parameter edits before activation validate without refetching;
    // activation issues the single initial request.
    panel.set_base_currency(&args.base).await?;
    if let Some(date) = &args.date {
        panel.set_as_of_date(date).await?;
    }
    panel.activate().await;

    into_data(panel.view()).map(CommandData::Rates)
}
