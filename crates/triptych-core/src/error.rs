use thiserror::Error;

/// Local input validation errors raised before any network call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("base currency cannot be empty")]
    EmptyCurrency,

    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("date '{value}' is in the future")]
    DateInFuture { value: String },

    #[error("coordinates must be 'LAT,LON': '{value}'")]
    InvalidCoordinates { value: String },
    #[error("latitude {value} is out of range")]
    LatitudeOutOfRange { value: f64 },
    #[error("longitude {value} is out of range")]
    LongitudeOutOfRange { value: f64 },
}
