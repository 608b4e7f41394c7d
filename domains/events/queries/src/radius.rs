use events_errors::ValidationError;

/// Nearby queries fall back to this radius when none is given.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Distance cutoff for nearby queries. A radius of 0 is the "no filter"
/// sentinel: every event is kept and still gets a distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusFilter {
    Within(f64),
    Unbounded,
}

impl RadiusFilter {
    pub fn from_km(radius_km: f64) -> Result<Self, ValidationError> {
        if radius_km.is_nan() {
            return Err(ValidationError::NonFinite { field: "radius" });
        }
        if radius_km < 0.0 {
            return Err(ValidationError::NegativeRadius(radius_km));
        }
        if radius_km == 0.0 || radius_km.is_infinite() {
            return Ok(RadiusFilter::Unbounded);
        }
        Ok(RadiusFilter::Within(radius_km))
    }

    pub fn admits(&self, distance_km: f64) -> bool {
        match self {
            RadiusFilter::Within(radius_km) => distance_km <= *radius_km,
            RadiusFilter::Unbounded => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_disables_cutoff() {
        assert_eq!(RadiusFilter::from_km(0.0), Ok(RadiusFilter::Unbounded));
        assert!(RadiusFilter::Unbounded.admits(20_000.0));
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let radius = RadiusFilter::from_km(5.0).unwrap();
        assert!(radius.admits(5.0));
        assert!(radius.admits(0.0));
        assert!(!radius.admits(5.000_001));
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        assert_eq!(
            RadiusFilter::from_km(-1.0),
            Err(ValidationError::NegativeRadius(-1.0))
        );
        assert_eq!(
            RadiusFilter::from_km(f64::NAN),
            Err(ValidationError::NonFinite { field: "radius" })
        );
    }
}
