use common_errors::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {event_id}")]
    NotFound { event_id: String },
    #[error("Event {event_id} is at full capacity ({capacity} attendees)")]
    CapacityExceeded { event_id: String, capacity: u32 },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Seed file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Seed data error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EventError {
    pub fn not_found(event_id: impl Into<String>) -> Self {
        Self::NotFound {
            event_id: event_id.into(),
        }
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound { event_id } => {
                AppError::not_found(
                    "EVENT_NOT_FOUND",
                    &format!("Event with ID {event_id} not found"),
                )
            }
            EventError::CapacityExceeded { event_id, capacity } => {
                AppError::conflict(
                    "CAPACITY_EXCEEDED",
                    &format!("Event {event_id} is full ({capacity} spots taken)"),
                )
            }
            EventError::Validation(validation) => {
                AppError::unprocessable_entity(
                    "VALIDATION_ERROR",
                    &validation.to_string(),
                )
            }
            EventError::Io(io_err) => {
                AppError::internal_server_error(&format!(
                    "Seed file error: {io_err}"
                ))
            }
            EventError::Json(json_err) => {
                AppError::internal_server_error(&format!(
                    "Seed data error: {json_err}"
                ))
            }
        }
    }
}

/// Malformed input rejected before anything in the catalog is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error(
        "latitude and longitude must be given together, {missing} is missing"
    )]
    IncompleteCoordinates { missing: &'static str },
    #[error("radius must not be negative, got {0}")]
    NegativeRadius(f64),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),
    #[error("event {event_id} must have a capacity of at least 1")]
    ZeroCapacity { event_id: String },
    #[error(
        "event {event_id} has {attendees} attendees but a capacity of \
         {capacity}"
    )]
    AttendeesExceedCapacity {
        event_id: String,
        attendees: usize,
        capacity: u32,
    },
    #[error("event {event_id} lists attendee {attendee_id} more than once")]
    DuplicateAttendee {
        event_id: String,
        attendee_id: String,
    },
    #[error("an event with id {0} already exists")]
    DuplicateEventId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_into_event_error() {
        let err: EventError = ValidationError::NegativeRadius(-1.0).into();

        assert!(matches!(
            err,
            EventError::Validation(ValidationError::NegativeRadius(_))
        ));
        assert_eq!(
            err.to_string(),
            "Validation error: radius must not be negative, got -1"
        );
    }

    #[test]
    fn test_capacity_message_names_event() {
        let err = EventError::CapacityExceeded {
            event_id: "event-009".to_string(),
            capacity: 2,
        };

        assert_eq!(
            err.to_string(),
            "Event event-009 is at full capacity (2 attendees)"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let not_found: AppError = EventError::not_found("event-404").into();
        assert_eq!(not_found.code(), "EVENT_NOT_FOUND");
        assert_eq!(not_found.status_code().as_u16(), 404);

        let full: AppError = EventError::CapacityExceeded {
            event_id: "event-009".to_string(),
            capacity: 2,
        }
        .into();
        assert_eq!(full.code(), "CAPACITY_EXCEEDED");
        assert_eq!(full.status_code().as_u16(), 409);

        let invalid: AppError =
            EventError::from(ValidationError::LatitudeOutOfRange(91.0)).into();
        assert_eq!(invalid.code(), "VALIDATION_ERROR");
        assert_eq!(invalid.status_code().as_u16(), 422);
    }

    #[test]
    fn test_incomplete_coordinates_message_names_the_pair() {
        let err = ValidationError::IncompleteCoordinates {
            missing: "longitude",
        };

        assert_eq!(
            err.to_string(),
            "latitude and longitude must be given together, longitude is \
             missing"
        );
    }
}
