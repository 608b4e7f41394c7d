pub mod create_event;
pub mod generate_share_link;
pub mod join_event;

pub use create_event::*;
pub use generate_share_link::*;
pub use join_event::*;
