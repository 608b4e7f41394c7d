use events_errors::ValidationError;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

use crate::events::Event;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(
        latitude: f64, longitude: f64,
    ) -> Result<Self, ValidationError> {
        let coordinates = Self {
            latitude,
            longitude,
        };
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// WGS84 degrees: finite, latitude in [-90, 90], longitude in
    /// [-180, 180].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.latitude.is_finite() {
            return Err(ValidationError::NonFinite { field: "latitude" });
        }
        if !self.longitude.is_finite() {
            return Err(ValidationError::NonFinite { field: "longitude" });
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance_km(*self, *other)
    }
}

/// Great-circle distance in kilometers (haversine).
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[derive(
    Clone,
    Debug,
    PartialEq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub address: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub city: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub state: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub country: String,
}

impl Location {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// An event paired with its distance from a query origin. The distance is a
/// per-query projection and is never written back into the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct NearbyEvent {
    pub event: Event,
    pub distance_km: f64,
}
