use chrono::{TimeZone, Utc};
use events_models::{Attendee, AttendeeStatus, Category, Event, Location};

/// A minimal event with capacity 100 and no attendees.
pub fn create_test_event(
    id: &str, title: &str, latitude: f64, longitude: f64,
) -> Event {
    Event::builder()
        .id(id)
        .title(title)
        .description(format!("{title} description"))
        .category(Category::Community)
        .starts_at(Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap())
        .location(
            Location::builder()
                .latitude(latitude)
                .longitude(longitude)
                .city("Testville")
                .build(),
        )
        .capacity(100)
        .build()
}

pub fn create_test_attendee(id: &str) -> Attendee {
    Attendee::builder()
        .id(id)
        .name(format!("Attendee {id}"))
        .avatar(format!("https://example.com/avatars/{id}.png"))
        .status(AttendeeStatus::Going)
        .build()
}

/// `count` attendees with ids `{prefix}-0`, `{prefix}-1`, ...
pub fn create_test_attendees(prefix: &str, count: usize) -> Vec<Attendee> {
    (0..count)
        .map(|i| create_test_attendee(&format!("{prefix}-{i}")))
        .collect()
}

/// Event whose every spot is already taken.
pub fn create_full_event(id: &str, capacity: u32) -> Event {
    Event::builder()
        .id(id)
        .title("Sold Out Show")
        .category(Category::Nightlife)
        .starts_at(Utc.with_ymd_and_hms(2025, 10, 31, 21, 0, 0).unwrap())
        .location(
            Location::builder()
                .latitude(40.7128)
                .longitude(-74.0060)
                .city("New York")
                .build(),
        )
        .capacity(capacity)
        .attendees(create_test_attendees("guest", capacity as usize))
        .build()
}

pub fn create_coachella_event() -> Event {
    Event::builder()
        .id("event-001")
        .title("Coachella Valley Music Festival 2025")
        .description(
            "Experience the world-famous Coachella Valley Music and Arts \
             Festival.",
        )
        .category(Category::Music)
        .tags(vec![
            "music".to_string(),
            "festival".to_string(),
            "concert".to_string(),
        ])
        .starts_at(Utc.with_ymd_and_hms(2025, 4, 11, 12, 0, 0).unwrap())
        .ends_at(Utc.with_ymd_and_hms(2025, 4, 13, 23, 59, 0).unwrap())
        .location(
            Location::builder()
                .latitude(33.6823)
                .longitude(-116.2380)
                .address("Empire Polo Club")
                .city("Indio")
                .state("California")
                .country("United States")
                .build(),
        )
        .capacity(60000)
        .attendees(create_test_attendees("user", 5))
        .is_hot(true)
        .is_featured(true)
        .build()
}

pub fn create_hackmit_event() -> Event {
    Event::builder()
        .id("event-002")
        .title("HackMIT 2025")
        .description("MIT's flagship hackathon.")
        .category(Category::Technology)
        .tags(vec!["hackathon".to_string(), "coding".to_string()])
        .starts_at(Utc.with_ymd_and_hms(2025, 9, 15, 18, 0, 0).unwrap())
        .location(
            Location::builder()
                .latitude(42.3601)
                .longitude(-71.0942)
                .city("Cambridge")
                .state("Massachusetts")
                .country("United States")
                .build(),
        )
        .capacity(5000)
        .is_hot(true)
        .build()
}

pub fn create_karachi_marathon_event() -> Event {
    Event::builder()
        .id("event-005")
        .title("Karachi Marathon 2025")
        .description("Run through the heart of the city.")
        .category(Category::Sports)
        .tags(vec!["marathon".to_string(), "running".to_string()])
        .starts_at(Utc.with_ymd_and_hms(2025, 7, 12, 6, 0, 0).unwrap())
        .location(
            Location::builder()
                .latitude(24.8700)
                .longitude(67.0211)
                .address("Mazar-e-Quaid")
                .city("Karachi")
                .state("Sindh")
                .country("Pakistan")
                .build(),
        )
        .capacity(5000)
        .build()
}

pub fn create_san_francisco_event() -> Event {
    Event::builder()
        .id("event-009")
        .title("Golden Gate Food Walk")
        .description("Tasting tour along the bay.")
        .category(Category::FoodAndDrink)
        .tags(vec!["food".to_string(), "tasting".to_string()])
        .starts_at(Utc.with_ymd_and_hms(2025, 8, 2, 11, 0, 0).unwrap())
        .location(
            Location::builder()
                .latitude(37.7749)
                .longitude(-122.4194)
                .city("San Francisco")
                .state("CA")
                .country("United States")
                .build(),
        )
        .capacity(40)
        .is_featured(true)
        .build()
}

/// Coachella, HackMIT, the Karachi marathon and a San Francisco food walk,
/// in that catalog order.
pub fn create_test_events() -> Vec<Event> {
    vec![
        create_coachella_event(),
        create_hackmit_event(),
        create_karachi_marathon_event(),
        create_san_francisco_event(),
    ]
}
