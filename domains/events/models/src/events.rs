use std::collections::HashSet;

use chrono::{DateTime, Utc};
use events_errors::ValidationError;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{
        RefOr,
        schema::{ObjectBuilder, OneOfBuilder, Schema, Type},
    },
};

use crate::{
    category::Category,
    location::{Coordinates, Location},
    share::share_link,
};

#[derive(
    Clone,
    Debug,
    PartialEq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[builder(setter(into))]
    pub id: String,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub tags: Vec<String>,
    #[builder(default)]
    #[serde(default)]
    pub price: Price,
    #[serde(rename = "date")]
    pub starts_at: DateTime<Utc>,
    /// Not checked against `starts_at`.
    #[builder(default, setter(strip_option))]
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    pub location: Location,
    pub capacity: u32,
    #[builder(default)]
    #[serde(default)]
    attendees: Vec<Attendee>,
    #[builder(default)]
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub cover_image: String,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Organizer>,
    #[builder(default)]
    #[serde(default)]
    pub is_hot: bool,
    #[builder(default)]
    #[serde(default)]
    pub is_featured: bool,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sponsors: Vec<Sponsor>,
    #[builder(default)]
    #[serde(default)]
    pub virtual_event: bool,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
    #[builder(default, setter(skip))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shareable_link: Option<String>,
}

/// Result of trying to add an attendee to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyAttending,
    Full,
}

impl Event {
    pub fn attendees(&self) -> &[Attendee] { &self.attendees }

    /// Always `capacity - attendees`, never stored.
    pub fn available_spots(&self) -> u32 {
        let taken = u32::try_from(self.attendees.len()).unwrap_or(u32::MAX);
        self.capacity.saturating_sub(taken)
    }

    pub fn is_attending(&self, attendee_id: &str) -> bool {
        self.attendees.iter().any(|a| a.id == attendee_id)
    }

    /// Appends `attendee` unless they are already listed or the event is
    /// full. Nothing changes in either of those cases.
    pub fn add_attendee(&mut self, attendee: Attendee) -> JoinOutcome {
        if self.is_attending(&attendee.id) {
            return JoinOutcome::AlreadyAttending;
        }
        if self.available_spots() == 0 {
            return JoinOutcome::Full;
        }
        self.attendees.push(attendee);
        JoinOutcome::Joined
    }

    pub fn shareable_link(&self) -> Option<&str> {
        self.shareable_link.as_deref()
    }

    /// Returns the stored link, deriving and storing it on first use.
    pub fn ensure_shareable_link(&mut self, base_url: &str) -> &str {
        self.shareable_link
            .get_or_insert_with(|| share_link(base_url, &self.title, &self.id))
    }

    pub fn coordinates(&self) -> Coordinates { self.location.coordinates() }

    /// Case-insensitive substring match over title, description, category
    /// name, tags and city. `needle` must already be lowercase; an empty
    /// needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        let hit = |field: &str| field.to_lowercase().contains(needle);

        hit(&self.title)
            || hit(&self.description)
            || hit(self.category.as_str())
            || self.tags.iter().any(|tag| hit(tag))
            || hit(&self.location.city)
    }

    /// Load-time consistency checks for records coming from a seed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyField("id"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.capacity == 0 {
            return Err(ValidationError::ZeroCapacity {
                event_id: self.id.clone(),
            });
        }
        self.coordinates().validate()?;

        if self.attendees.len() > self.capacity as usize {
            return Err(ValidationError::AttendeesExceedCapacity {
                event_id: self.id.clone(),
                attendees: self.attendees.len(),
                capacity: self.capacity,
            });
        }

        let mut seen = HashSet::with_capacity(self.attendees.len());
        for attendee in &self.attendees {
            if attendee.id.trim().is_empty() {
                return Err(ValidationError::EmptyField("attendee id"));
            }
            if !seen.insert(attendee.id.as_str()) {
                return Err(ValidationError::DuplicateAttendee {
                    event_id: self.id.clone(),
                    attendee_id: attendee.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AttendeeStatus {
    Going,
    Interested,
    Invited,
}

#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
pub struct Attendee {
    #[builder(setter(into))]
    pub id: String,
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub avatar: String,
    #[builder(default = AttendeeStatus::Going)]
    pub status: AttendeeStatus,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub logo: String,
}

/// Ticket price. On the wire either a non-negative number or the string
/// `"free"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PriceRepr", into = "PriceRepr")]
pub enum Price {
    #[default]
    Free,
    Amount(f64),
}

impl Price {
    pub fn is_free(&self) -> bool { matches!(self, Price::Free) }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Amount(f64),
    Label(String),
}

impl TryFrom<PriceRepr> for Price {
    type Error = String;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        match repr {
            PriceRepr::Amount(amount) if amount.is_finite() && amount >= 0.0 => {
                Ok(Price::Amount(amount))
            }
            PriceRepr::Amount(amount) => {
                Err(ValidationError::NegativePrice(amount).to_string())
            }
            PriceRepr::Label(label) if label.eq_ignore_ascii_case("free") => {
                Ok(Price::Free)
            }
            PriceRepr::Label(label) => {
                Err(format!("price must be a number or \"free\", got {label}"))
            }
        }
    }
}

impl From<Price> for PriceRepr {
    fn from(price: Price) -> Self {
        match price {
            Price::Free => PriceRepr::Label("free".to_string()),
            Price::Amount(amount) => PriceRepr::Amount(amount),
        }
    }
}

impl PartialSchema for Price {
    fn schema() -> RefOr<Schema> {
        let amount = ObjectBuilder::new().schema_type(Type::Number).build();
        let free = ObjectBuilder::new()
            .schema_type(Type::String)
            .description(Some("the literal \"free\""))
            .build();

        RefOr::T(Schema::OneOf(
            OneOfBuilder::new()
                .item(Schema::Object(amount))
                .item(Schema::Object(free))
                .build(),
        ))
    }
}

impl ToSchema for Price {}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn event(capacity: u32) -> Event {
        Event::builder()
            .id("event-002")
            .title("HackMIT 2025")
            .category(Category::Technology)
            .starts_at(Utc.with_ymd_and_hms(2025, 9, 15, 18, 0, 0).unwrap())
            .location(
                Location::builder()
                    .latitude(42.3601)
                    .longitude(-71.0942)
                    .city("Cambridge")
                    .build(),
            )
            .capacity(capacity)
            .tags(vec!["hackathon".to_string(), "Coding".to_string()])
            .build()
    }

    fn attendee(id: &str) -> Attendee {
        Attendee::builder().id(id).name(format!("User {id}")).build()
    }

    #[test]
    fn test_available_spots_tracks_attendees() {
        let mut event = event(3);
        assert_eq!(event.available_spots(), 3);

        assert_eq!(event.add_attendee(attendee("u1")), JoinOutcome::Joined);
        assert_eq!(event.add_attendee(attendee("u2")), JoinOutcome::Joined);

        assert_eq!(event.available_spots(), 1);
        assert_eq!(event.attendees().len(), 2);
    }

    #[test]
    fn test_add_attendee_twice_is_noop() {
        let mut event = event(3);
        event.add_attendee(attendee("u1"));

        assert_eq!(
            event.add_attendee(attendee("u1")),
            JoinOutcome::AlreadyAttending
        );
        assert_eq!(event.attendees().len(), 1);
    }

    #[test]
    fn test_add_attendee_when_full() {
        let mut event = event(1);
        event.add_attendee(attendee("u1"));

        assert_eq!(event.add_attendee(attendee("u2")), JoinOutcome::Full);
        assert_eq!(event.attendees().len(), 1);
        assert_eq!(event.available_spots(), 0);
    }

    #[test]
    fn test_shareable_link_is_memoized() {
        let mut event = event(10);
        assert_eq!(event.shareable_link(), None);

        let first = event
            .ensure_shareable_link("https://eventsify.app/event/")
            .to_string();
        event.title = "Renamed".to_string();
        let second =
            event.ensure_shareable_link("https://other.example/").to_string();

        assert_eq!(first, "https://eventsify.app/event/hackmit-2025-event-002");
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_search_fields() {
        let event = event(10);

        assert!(event.matches_search("hackmit"));
        assert!(event.matches_search("technology"));
        assert!(event.matches_search("coding"));
        assert!(event.matches_search("cambridge"));
        assert!(event.matches_search(""));
        assert!(!event.matches_search("marathon"));
    }

    #[test]
    fn test_validate_rejects_overbooked_seed() {
        let event = Event::builder()
            .id("event-x")
            .title("Tiny")
            .category(Category::Music)
            .starts_at(Utc::now())
            .location(Location::builder().latitude(0.0).longitude(0.0).build())
            .capacity(1)
            .attendees(vec![attendee("a"), attendee("b")])
            .build();

        assert!(matches!(
            event.validate(),
            Err(ValidationError::AttendeesExceedCapacity { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_attendee() {
        let event = Event::builder()
            .id("event-x")
            .title("Twice")
            .category(Category::Music)
            .starts_at(Utc::now())
            .location(Location::builder().latitude(0.0).longitude(0.0).build())
            .capacity(5)
            .attendees(vec![attendee("a"), attendee("a")])
            .build();

        assert!(matches!(
            event.validate(),
            Err(ValidationError::DuplicateAttendee { .. })
        ));
    }

    #[test]
    fn test_price_wire_format() {
        assert_eq!(serde_json::to_string(&Price::Free).unwrap(), "\"free\"");
        assert_eq!(serde_json::to_string(&Price::Amount(499.0)).unwrap(), "499.0");

        let free: Price = serde_json::from_str("\"Free\"").unwrap();
        let paid: Price = serde_json::from_str("75").unwrap();
        assert_eq!(free, Price::Free);
        assert_eq!(paid, Price::Amount(75.0));

        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert!(serde_json::from_str::<Price>("\"cheap\"").is_err());
    }

    #[test]
    fn test_deserialize_ignores_derived_fields() {
        let json = r#"{
            "id": "event-010",
            "title": "Seeded",
            "category": "Food & Drink",
            "date": "2025-08-08T11:00:00Z",
            "location": { "latitude": 41.8781, "longitude": -87.6298, "city": "Chicago" },
            "capacity": 2,
            "availableSpots": 9999,
            "distance": 12.1,
            "attendees": [
                { "id": "u1", "name": "Emma", "avatar": "", "status": "interested" }
            ],
            "price": "free"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.category, Category::FoodAndDrink);
        assert_eq!(event.available_spots(), 1);
        assert_eq!(event.attendees()[0].status, AttendeeStatus::Interested);
        assert!(event.validate().is_ok());
    }
}
