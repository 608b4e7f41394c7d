use chrono::{DateTime, Utc};
use events_errors::ValidationError;
use events_models::{
    Category, Event, Faq, Location, MediaItem, Organizer, Price, Sponsor,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A new catalog record. New events start with no attendees and no
/// shareable link.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventCommand {
    /// Generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: Price,
    #[serde(rename = "date")]
    pub starts_at: DateTime<Utc>,
    #[serde(rename = "endDate", default)]
    pub ends_at: Option<DateTime<Utc>>,
    pub location: Location,
    pub capacity: u32,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub organizer: Option<Organizer>,
    #[serde(default)]
    pub is_hot: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub virtual_event: bool,
    #[serde(default)]
    pub stream_url: Option<String>,
}

impl CreateEventCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            return Err(ValidationError::EmptyField("id"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.capacity == 0 {
            return Err(ValidationError::ZeroCapacity {
                event_id: self.id.clone().unwrap_or_default(),
            });
        }
        self.location.coordinates().validate()
    }

    pub fn into_event(self, id: String) -> Event {
        let mut event = Event::builder()
            .id(id)
            .title(self.title)
            .description(self.description)
            .category(self.category)
            .tags(self.tags)
            .price(self.price)
            .starts_at(self.starts_at)
            .location(self.location)
            .capacity(self.capacity)
            .media(self.media)
            .cover_image(self.cover_image)
            .is_hot(self.is_hot)
            .is_featured(self.is_featured)
            .highlights(self.highlights)
            .faqs(self.faqs)
            .sponsors(self.sponsors)
            .virtual_event(self.virtual_event)
            .build();

        event.subcategory = self.subcategory;
        event.ends_at = self.ends_at;
        event.banner_image = self.banner_image;
        event.organizer = self.organizer;
        event.stream_url = self.stream_url;
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CreateEventCommand {
        serde_json::from_value(serde_json::json!({
            "title": "Karachi Marathon 2025",
            "category": "Sports",
            "date": "2025-07-12T06:00:00Z",
            "location": {
                "latitude": 24.8700,
                "longitude": 67.0211,
                "city": "Karachi"
            },
            "capacity": 5000,
            "price": 2000,
            "tags": ["marathon", "running"]
        }))
        .unwrap()
    }

    #[test]
    fn test_into_event_keeps_fields() {
        let event = command().into_event("event-005".to_string());

        assert_eq!(event.id, "event-005");
        assert_eq!(event.category, Category::Sports);
        assert_eq!(event.price, Price::Amount(2000.0));
        assert_eq!(event.available_spots(), 5000);
        assert!(event.attendees().is_empty());
        assert_eq!(event.shareable_link(), None);
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut command = command();
        command.capacity = 0;

        assert!(matches!(
            command.validate(),
            Err(ValidationError::ZeroCapacity { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_coordinates() {
        let mut command = command();
        command.location.latitude = 123.0;

        assert_eq!(
            command.validate(),
            Err(ValidationError::LatitudeOutOfRange(123.0))
        );
    }
}
