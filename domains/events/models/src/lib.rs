pub mod category;
pub mod events;
pub mod location;
pub mod share;

pub use category::Category;
pub use events::{
    Attendee, AttendeeStatus, Event, Faq, JoinOutcome, MediaItem, MediaKind,
    Organizer, Price, Sponsor,
};
pub use location::{
    Coordinates, EARTH_RADIUS_KM, Location, NearbyEvent, distance_km,
};
pub use share::{share_link, slugify};
