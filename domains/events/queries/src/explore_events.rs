use events_errors::ValidationError;
use events_models::Coordinates;
use serde::Deserialize;

use crate::radius::RadiusFilter;

/// Used when the caller has no location to offer (San Francisco).
pub const DEFAULT_ORIGIN: Coordinates = Coordinates {
    latitude: 37.7749,
    longitude: -122.4194,
};

pub const DEFAULT_EXPLORE_RADIUS_KM: f64 = 5.0;

/// Explore screen query: a nearby search (or the whole catalog with
/// `show_all`) narrowed by an optional text filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExploreEventsQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_km: Option<f64>,
    pub query: Option<String>,
    #[serde(default)]
    pub show_all: bool,
}

impl ExploreEventsQuery {
    pub fn origin(&self) -> Result<Coordinates, ValidationError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                Coordinates::new(latitude, longitude)
            }
            (None, None) => Ok(DEFAULT_ORIGIN),
            (Some(_), None) => {
                Err(ValidationError::IncompleteCoordinates {
                    missing: "longitude",
                })
            }
            (None, Some(_)) => {
                Err(ValidationError::IncompleteCoordinates {
                    missing: "latitude",
                })
            }
        }
    }

    pub fn radius(&self) -> Result<RadiusFilter, ValidationError> {
        RadiusFilter::from_km(
            self.radius_km.unwrap_or(DEFAULT_EXPLORE_RADIUS_KM),
        )
    }

    /// Lowercased text filter, `None` when absent or blank.
    pub fn needle(&self) -> Option<String> {
        self.query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .map(str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_defaults_when_absent() {
        let query = ExploreEventsQuery::default();
        assert_eq!(query.origin(), Ok(DEFAULT_ORIGIN));
    }

    #[test]
    fn test_origin_needs_both_halves() {
        let query = ExploreEventsQuery {
            latitude: Some(10.0),
            ..Default::default()
        };
        assert_eq!(
            query.origin(),
            Err(ValidationError::IncompleteCoordinates {
                missing: "longitude"
            })
        );
    }

    #[test]
    fn test_blank_text_filter_is_ignored() {
        let query = ExploreEventsQuery {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.needle(), None);
    }

    #[test]
    fn test_text_filter_keeps_inner_spacing() {
        let query = ExploreEventsQuery {
            query: Some(" Food Walk".to_string()),
            ..Default::default()
        };
        assert_eq!(query.needle(), Some(" food walk".to_string()));
    }
}
