use events_errors::ValidationError;
use events_models::Coordinates;
use serde::Deserialize;

use crate::radius::{DEFAULT_RADIUS_KM, RadiusFilter};

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyEventsQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers. Missing means [`DEFAULT_RADIUS_KM`], 0 means unbounded.
    pub radius_km: Option<f64>,
}

impl NearbyEventsQuery {
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_km: Some(radius_km),
        }
    }

    pub fn origin(&self) -> Result<Coordinates, ValidationError> {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn radius(&self) -> Result<RadiusFilter, ValidationError> {
        RadiusFilter::from_km(self.radius_km.unwrap_or(DEFAULT_RADIUS_KM))
    }
}
