use events_errors::ValidationError;
use events_models::{Attendee, AttendeeStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/150";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinEventCommand {
    #[serde(skip)]
    pub event_id: String,
    pub attendee_id: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl JoinEventCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.event_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("event id"));
        }
        if self.attendee_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("attendee id"));
        }
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("display name"));
        }
        Ok(())
    }

    /// The attendee this command adds, always with status `going`.
    pub fn attendee(&self) -> Attendee {
        Attendee::builder()
            .id(self.attendee_id.clone())
            .name(self.display_name.clone())
            .avatar(
                self.avatar_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            )
            .status(AttendeeStatus::Going)
            .build()
    }
}
