pub mod explore_events;
pub mod get_event;
pub mod list_events;
pub mod nearby_events;
pub mod radius;
pub mod search_events;

pub use explore_events::*;
pub use get_event::*;
pub use list_events::*;
pub use nearby_events::*;
pub use radius::*;
pub use search_events::*;
