use std::sync::Arc;

use triptych_core::{FixedLocator, GeoPoint, ReqwestHttpClient, WeatherPanel};

use crate::cli::WeatherArgs;
use crate::error::CliError;

use super::{into_data, CommandData};

pub async fn run(args: &WeatherArgs) -> Result<CommandData, CliError> {
    let panel = WeatherPanel::new(Arc::new(ReqwestHttpClient::new()));

    if let Some(coords) = &args.coords {
        let point = GeoPoint::parse(coords)?;
        panel.use_current_location(&FixedLocator(point)).await;
    } else if let Some(location) = &args.location {
        panel.submit_location(location).await;
    } else {
        panel.activate().await;
    }

    into_data(panel.view()).map(CommandData::Weather)
}
