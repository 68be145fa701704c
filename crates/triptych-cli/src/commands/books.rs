use std::sync::Arc;

use triptych_core::{BooksPanel, ReqwestHttpClient};

use crate::cli::BooksArgs;
use crate::error::CliError;

use super::{into_data, CommandData};

pub async fn run(args: &BooksArgs) -> Result<CommandData, CliError> {
    let panel = BooksPanel::new(Arc::new(ReqwestHttpClient::new()));

    match &args.query {
        Some(query) => {
            if !panel.submit_query(query).await {
                return Err(CliError::BlankQuery);
            }
        }
        None => panel.activate().await,
    }

    into_data(panel.view()).map(CommandData::Books)
}
