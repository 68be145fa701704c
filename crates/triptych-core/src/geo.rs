//! Geolocation acquisition for the weather domain.
//!
//! The platform location service is abstracted behind [`Locator`]; a
//! resolved coordinate pair is fed into the weather query as a
//! `"lat,lon"` text query. Failure surfaces as a local error without any
//! network call being issued.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::error::ValidationError;

/// Resolved coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a `"LAT,LON"` pair.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        fn invalid(input: &str) -> ValidationError {
            ValidationError::InvalidCoordinates {
                value: input.to_owned(),
            }
        }

        let (lat, lon) = input.split_once(',').ok_or_else(|| invalid(input))?;
        let latitude: f64 = lat.trim().parse().map_err(|_| invalid(input))?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid(input))?;
        Self::new(latitude, longitude)
    }

    /// Provider-acceptable fixed-point query text.
    pub fn as_query(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Location service failure; never reaches the network.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocateError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location service unavailable")]
    Unavailable,
}

/// Platform location service contract.
pub trait Locator: Send + Sync {
    fn locate<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<GeoPoint, LocateError>> + Send + 'a>>;
}

/// Locator resolving to a fixed point (known coordinates, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub GeoPoint);

impl Locator for FixedLocator {
    fn locate<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<GeoPoint, LocateError>> + Send + 'a>> {
        let point = self.0;
        Box::pin(async move { Ok(point) })
    }
}

/// Locator that always fails (no platform service, denied permission).
#[derive(Debug, Clone, Copy)]
pub struct UnavailableLocator(pub LocateError);

impl Locator for UnavailableLocator {
    fn locate<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<GeoPoint, LocateError>> + Send + 'a>> {
        let error = self.0;
        Box::pin(async move { Err(error) })
    }
}
