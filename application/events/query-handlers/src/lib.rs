use dao_traits::GenericDao;
use events_dao::EventDao;
use events_errors::EventError;
use events_queries::{
    ExploreEventsQuery, GetEventQuery, ListEventsQuery, NearbyEventsQuery,
    SearchEventsQuery,
};
use events_responses::EventResponse;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct GetEventQueryHandler {
    event_dao: EventDao,
}

impl GetEventQueryHandler {
    pub fn new(event_dao: EventDao) -> Self { Self { event_dao } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetEventQuery,
    ) -> Result<EventResponse, EventError> {
        let event = self.event_dao.find_by_id(&query.event_id).await?;
        Ok(event.into())
    }
}

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    event_dao: EventDao,
}

impl ListEventsQueryHandler {
    pub fn new(event_dao: EventDao) -> Self { Self { event_dao } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: ListEventsQuery,
    ) -> Result<Vec<EventResponse>, EventError> {
        let events = if query.is_unfiltered() {
            self.event_dao.all().await?
        }
        else {
            self.event_dao
                .find_with_filters(query.category, query.featured, query.hot)
                .await
        };

        debug!(count = events.len(), "Events listed");
        Ok(events.into_iter().map(EventResponse::from).collect())
    }
}

#[derive(Clone)]
pub struct SearchEventsQueryHandler {
    event_dao: EventDao,
}

impl SearchEventsQueryHandler {
    pub fn new(event_dao: EventDao) -> Self { Self { event_dao } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: SearchEventsQuery,
    ) -> Result<Vec<EventResponse>, EventError> {
        let events = self.event_dao.search(&query.query).await;
        debug!(count = events.len(), "Search finished");
        Ok(events.into_iter().map(EventResponse::from).collect())
    }
}

#[derive(Clone)]
pub struct NearbyEventsQueryHandler {
    event_dao: EventDao,
}

impl NearbyEventsQueryHandler {
    pub fn new(event_dao: EventDao) -> Self { Self { event_dao } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: NearbyEventsQuery,
    ) -> Result<Vec<EventResponse>, EventError> {
        let origin = query.origin()?;
        let radius = query.radius()?;

        let nearby = self.event_dao.find_nearby(origin, radius).await;
        Ok(nearby.into_iter().map(EventResponse::from).collect())
    }
}

/// Nearby search narrowed by a text filter. With `show_all` the distance
/// cutoff is dropped and results keep catalog order without distances.
#[derive(Clone)]
pub struct ExploreEventsQueryHandler {
    event_dao: EventDao,
}

impl ExploreEventsQueryHandler {
    pub fn new(event_dao: EventDao) -> Self { Self { event_dao } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: ExploreEventsQuery,
    ) -> Result<Vec<EventResponse>, EventError> {
        let needle = query.needle();
        let keep = |response: &EventResponse| {
            needle
                .as_deref()
                .is_none_or(|needle| response.event.matches_search(needle))
        };

        let responses: Vec<EventResponse> = if query.show_all {
            self.event_dao
                .all()
                .await?
                .into_iter()
                .map(EventResponse::from)
                .filter(|response| keep(response))
                .collect()
        }
        else {
            let origin = query.origin()?;
            let radius = query.radius()?;
            self.event_dao
                .find_nearby(origin, radius)
                .await
                .into_iter()
                .map(EventResponse::from)
                .filter(|response| keep(response))
                .collect()
        };

        debug!(count = responses.len(), "Explore results ready");
        Ok(responses)
    }
}
