use events_models::{Event, NearbyEvent};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An event as handed to clients: the stored record plus its derived
/// fields. `distance` is only present on location-based results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    pub available_spots: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            available_spots: event.available_spots(),
            event,
            distance: None,
        }
    }
}

impl From<NearbyEvent> for EventResponse {
    fn from(nearby: NearbyEvent) -> Self {
        Self {
            available_spots: nearby.event.available_spots(),
            event: nearby.event,
            distance: Some(nearby.distance_km),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinEventResponse {
    pub event: EventResponse,
    /// False when the attendee was already on the list.
    pub joined: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinkResponse {
    pub event_id: String,
    pub shareable_link: String,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use events_models::{Category, Location};

    use super::*;

    fn event() -> Event {
        Event::builder()
            .id("event-001")
            .title("Coachella Valley Music Festival 2025")
            .category(Category::Music)
            .starts_at(Utc.with_ymd_and_hms(2025, 4, 11, 12, 0, 0).unwrap())
            .location(
                Location::builder()
                    .latitude(33.6823)
                    .longitude(-116.2380)
                    .build(),
            )
            .capacity(60000)
            .build()
    }

    #[test]
    fn test_response_flattens_record_and_derived_fields() {
        let json = serde_json::to_value(EventResponse::from(event())).unwrap();

        assert_eq!(json["id"], "event-001");
        assert_eq!(json["availableSpots"], 60000);
        assert_eq!(json["date"], "2025-04-11T12:00:00Z");
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn test_nearby_response_carries_distance() {
        let nearby = NearbyEvent {
            event: event(),
            distance_km: 2.5,
        };
        let json = serde_json::to_value(EventResponse::from(nearby)).unwrap();

        assert_eq!(json["distance"], 2.5);
    }
}
