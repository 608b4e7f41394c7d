use dao_traits::GenericDao;
use events_commands::{
    CreateEventCommand, GenerateShareLinkCommand, JoinEventCommand,
};
use events_dao::EventDao;
use events_errors::EventError;
use events_models::JoinOutcome;
use events_responses::{EventResponse, JoinEventResponse, ShareLinkResponse};
use tracing::{info, instrument};
use url::Url;
use uuid::Uuid;

#[derive(Clone)]
pub struct JoinEventHandler {
    event_dao: EventDao,
}

impl JoinEventHandler {
    pub fn new(event_dao: EventDao) -> Self { Self { event_dao } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: JoinEventCommand,
    ) -> Result<JoinEventResponse, EventError> {
        command.validate()?;

        let (event, outcome) = self
            .event_dao
            .join(&command.event_id, command.attendee())
            .await?;

        Ok(JoinEventResponse {
            event: event.into(),
            joined: outcome == JoinOutcome::Joined,
        })
    }
}

#[derive(Clone)]
pub struct GenerateShareLinkHandler {
    event_dao: EventDao,
    base_url: Url,
}

impl GenerateShareLinkHandler {
    pub fn new(event_dao: EventDao, base_url: Url) -> Self {
        Self {
            event_dao,
            base_url,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: GenerateShareLinkCommand,
    ) -> Result<ShareLinkResponse, EventError> {
        let shareable_link = self
            .event_dao
            .generate_shareable_link(&command.event_id, self.base_url.as_str())
            .await?;

        Ok(ShareLinkResponse {
            event_id: command.event_id,
            shareable_link,
        })
    }
}

#[derive(Clone)]
pub struct CreateEventHandler {
    event_dao: EventDao,
}

impl CreateEventHandler {
    pub fn new(event_dao: EventDao) -> Self { Self { event_dao } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateEventCommand,
    ) -> Result<EventResponse, EventError> {
        command.validate()?;

        let id = command
            .id
            .clone()
            .unwrap_or_else(|| format!("event-{}", Uuid::now_v7()));
        let saved = self.event_dao.create(command.into_event(id)).await?;
        info!(event_id = %saved.id, "Event created");

        Ok(saved.into())
    }
}

#[cfg(test)]
mod tests {
    use events_errors::ValidationError;
    use test_utils::*;

    use super::*;

    fn setup_dao() -> EventDao {
        init_test_tracing();
        EventDao::from_events(create_test_events()).unwrap()
    }

    fn join_command(event_id: &str, attendee_id: &str) -> JoinEventCommand {
        JoinEventCommand {
            event_id: event_id.to_string(),
            attendee_id: attendee_id.to_string(),
            display_name: "Test Attendee".to_string(),
            avatar_url: None,
        }
    }

    fn base_url() -> Url { Url::parse(TEST_SHARE_BASE_URL).unwrap() }

    #[tokio::test]
    async fn test_join_event_handler() {
        let handler = JoinEventHandler::new(setup_dao());

        let response = handler
            .execute(join_command("event-001", "user-100"))
            .await
            .unwrap();

        assert!(response.joined);
        assert_eq!(response.event.available_spots, 59994);
        assert_eq!(response.event.event.attendees().len(), 6);
    }

    #[tokio::test]
    async fn test_join_event_handler_repeat_join() {
        let handler = JoinEventHandler::new(setup_dao());

        let response = handler
            .execute(join_command("event-001", "user-0"))
            .await
            .unwrap();

        assert!(!response.joined);
        assert_eq!(response.event.available_spots, 59995);
    }

    #[tokio::test]
    async fn test_join_event_handler_full_event() {
        init_test_tracing();
        let dao =
            EventDao::from_events(vec![create_full_event("event-full", 1)])
                .unwrap();
        let handler = JoinEventHandler::new(dao.clone());

        let result = handler.execute(join_command("event-full", "late")).await;

        assert!(matches!(result, Err(EventError::CapacityExceeded { .. })));
        let stored = dao.find_by_id("event-full").await.unwrap();
        assert_eq!(stored.attendees().len(), 1);
    }

    #[tokio::test]
    async fn test_join_event_handler_rejects_blank_name() {
        let handler = JoinEventHandler::new(setup_dao());
        let mut command = join_command("event-001", "user-100");
        command.display_name = String::new();

        let result = handler.execute(command).await;

        assert!(matches!(
            result,
            Err(EventError::Validation(ValidationError::EmptyField(_)))
        ));
    }

    #[tokio::test]
    async fn test_join_event_handler_not_found() {
        let handler = JoinEventHandler::new(setup_dao());

        let result = handler.execute(join_command("event-404", "u")).await;

        assert!(matches!(result, Err(EventError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_generate_share_link_handler() {
        let handler = GenerateShareLinkHandler::new(setup_dao(), base_url());

        let response = handler
            .execute(GenerateShareLinkCommand {
                event_id: "event-002".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.event_id, "event-002");
        assert_eq!(
            response.shareable_link,
            "https://eventsify.app/event/hackmit-2025-event-002"
        );
    }

    #[tokio::test]
    async fn test_generate_share_link_handler_not_found() {
        let handler = GenerateShareLinkHandler::new(setup_dao(), base_url());

        let result = handler
            .execute(GenerateShareLinkCommand {
                event_id: "event-404".to_string(),
            })
            .await;

        assert!(matches!(result, Err(EventError::NotFound { .. })));
    }

    fn create_command(id: Option<&str>) -> CreateEventCommand {
        let mut command: CreateEventCommand =
            serde_json::from_value(serde_json::json!({
                "title": "Beach Cleanup Drive",
                "category": "Charity",
                "date": "2025-06-05T08:00:00Z",
                "location": {
                    "latitude": 24.7981,
                    "longitude": 67.0286,
                    "city": "Karachi"
                },
                "capacity": 200
            }))
            .unwrap();
        command.id = id.map(str::to_string);
        command
    }

    #[tokio::test]
    async fn test_create_event_handler_generates_id() {
        let dao = setup_dao();
        let handler = CreateEventHandler::new(dao.clone());

        let response = handler.execute(create_command(None)).await.unwrap();

        assert!(response.event.id.starts_with("event-"));
        assert_eq!(response.available_spots, 200);
        assert_eq!(dao.len().await, 5);
    }

    #[tokio::test]
    async fn test_create_event_handler_duplicate_id() {
        let handler = CreateEventHandler::new(setup_dao());

        let result = handler.execute(create_command(Some("event-001"))).await;

        assert!(matches!(
            result,
            Err(EventError::Validation(ValidationError::DuplicateEventId(_)))
        ));
    }
}
