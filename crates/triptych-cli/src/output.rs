use triptych_core::{BookList, RateTable, WeatherReport};

use crate::cli::OutputFormat;
use crate::commands::CommandData;
use crate::error::CliError;

pub fn render(data: &CommandData, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(data, pretty),
        OutputFormat::Table => {
            render_table(data);
            Ok(())
        }
    }
}

fn render_json(data: &CommandData, pretty: bool) -> Result<(), CliError> {
    let value = match data {
        CommandData::Rates(table) => serde_json::to_value(table)?,
        CommandData::Books(list) => serde_json::to_value(list)?,
        CommandData::Weather(report) => serde_json::to_value(report)?,
    };

    let payload = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{payload}");
    Ok(())
}

fn render_table(data: &CommandData) {
    match data {
        CommandData::Rates(table) => render_rates(table),
        CommandData::Books(list) => render_books(list),
        CommandData::Weather(report) => render_weather(report),
    }
}

fn render_rates(table: &RateTable) {
    println!("base: {}", table.base);
    println!("{:<10} {:>12}", "currency", "rate");

    if table.is_empty() {
        println!("{:<10} {:>12}", "-", "no data");
        return;
    }

    // Rates render with exactly four decimal digits.
    for (code, rate) in &table.rates {
        println!("{code:<10} {rate:>12.4}");
    }
}

fn render_books(list: &BookList) {
    for (index, book) in list.books.iter().enumerate() {
        println!("{}. {}", index + 1, book.title);
        if !book.authors.is_empty() {
            println!("   by {}", book.authors.join(", "));
        }
        if let Some(year) = book.first_publish_year {
            println!("   first published {year}");
        }
        if let Some(count) = book.edition_count {
            println!("   {count} editions");
        }
        if let Some(url) = book.cover_url() {
            println!("   cover: {url}");
        }
    }
}

fn render_weather(report: &WeatherReport) {
    println!("{}, {}", report.location_name, report.country);
    println!("local time: {}", report.local_time);
    println!(
        "temperature: {:.0}°C (feels like {:.0}°C)",
        report.temperature_c, report.feels_like_c
    );
    if let Some(description) = &report.description {
        println!("conditions: {description}");
    }
    println!("humidity: {:.0}%", report.humidity_pct);
    println!("wind: {:.0} km/h", report.wind_speed_kmh);
    println!("pressure: {:.0} hPa", report.pressure_hpa);
    println!("visibility: {:.0} km", report.visibility_km);
}
