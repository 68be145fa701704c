use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::ValidationError;
use crate::source::QueryParams;

const MAX_CODE_LEN: usize = 3;

/// Maximum number of rate rows kept from a provider response.
pub const MAX_RATE_ROWS: usize = 50;

/// Three-letter base currency code.
///
/// Input is coerced rather than rejected: trimmed, upper-cased, and cut
/// to three characters. Codes the provider does not know are deferred to
/// the provider's own error response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn coerce(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }

        let normalized: String = trimmed
            .chars()
            .take(MAX_CODE_LEN)
            .collect::<String>()
            .to_uppercase();
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::coerce(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

/// As-of date for a rates request: either the provider's latest fixing
/// or a specific calendar day no later than today (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDate {
    Latest,
    On(Date),
}

impl RateDate {
    /// Parse `YYYY-MM-DD` or the literal `latest`, rejecting future dates.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("latest") {
            return Ok(Self::Latest);
        }

        let format = format_description!("[year]-[month]-[day]");
        let date = Date::parse(trimmed, format).map_err(|_| ValidationError::InvalidDate {
            value: trimmed.to_owned(),
        })?;

        if date > today_utc() {
            return Err(ValidationError::DateInFuture {
                value: trimmed.to_owned(),
            });
        }

        Ok(Self::On(date))
    }

    pub fn today() -> Self {
        Self::On(today_utc())
    }

    /// URL path segment for the provider: a date or `latest`.
    pub fn as_path_segment(&self) -> String {
        match self {
            Self::Latest => String::from("latest"),
            Self::On(date) => format!(
                "{:04}-{:02}-{:02}",
                date.year(),
                u8::from(date.month()),
                date.day()
            ),
        }
    }
}

fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Query parameters for the currency domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatesParams {
    pub base: CurrencyCode,
    pub date: RateDate,
}

impl Default for RatesParams {
    fn default() -> Self {
        Self {
            base: CurrencyCode(String::from("EUR")),
            date: RateDate::today(),
        }
    }
}

impl QueryParams for RatesParams {}

/// Ordered currency-code → rate mapping in provider order, bounded to
/// [`MAX_RATE_ROWS`] entries. May be empty; presentation renders an
/// explicit "no data" row rather than treating that as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base: CurrencyCode,
    pub rates: Vec<(String, f64)>,
}

impl RateTable {
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }
}
