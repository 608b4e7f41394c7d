use std::{collections::HashMap, path::Path, sync::Arc};

use async_trait::async_trait;
use dao_traits::GenericDao;
use events_errors::{EventError, ValidationError};
use events_models::{
    Attendee, Category, Coordinates, Event, JoinOutcome, NearbyEvent,
};
use events_queries::{ListEventsQuery, RadiusFilter};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// Insertion-ordered records plus an id index into them.
#[derive(Default)]
struct Catalog {
    events: Vec<Event>,
    index: HashMap<String, usize>,
}

impl Catalog {
    fn insert(&mut self, event: Event) -> Result<(), ValidationError> {
        event.validate()?;
        if self.index.contains_key(&event.id) {
            return Err(ValidationError::DuplicateEventId(event.id));
        }
        self.index.insert(event.id.clone(), self.events.len());
        self.events.push(event);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<&Event> {
        let position = *self.index.get(id)?;
        self.events.get(position)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Event> {
        let position = *self.index.get(id)?;
        self.events.get_mut(position)
    }

    fn filtered(&self, keep: impl Fn(&Event) -> bool) -> Vec<Event> {
        self.events.iter().filter(|&event| keep(event)).cloned().collect()
    }
}

/// The in-memory event catalog. Clones share the same records; mutations
/// take the write lock, reads share the read lock.
#[derive(Clone, Default)]
pub struct EventDao {
    catalog: Arc<RwLock<Catalog>>,
}

impl EventDao {
    pub fn new() -> Self { Self::default() }

    /// Builds a catalog from an initial snapshot, rejecting records that
    /// break the catalog invariants.
    pub fn from_events(
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self, EventError> {
        let mut catalog = Catalog::default();
        for event in events {
            catalog.insert(event)?;
        }
        Ok(Self {
            catalog: Arc::new(RwLock::new(catalog)),
        })
    }

    /// Seeds from a JSON array of event records.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::from_events(events)
    }

    #[instrument]
    pub async fn from_seed_file(
        path: impl AsRef<Path> + std::fmt::Debug,
    ) -> Result<Self, EventError> {
        let json = tokio::fs::read_to_string(path).await?;
        let dao = Self::from_json(&json)?;
        info!(events = dao.len().await, "Catalog seeded from file");
        Ok(dao)
    }

    pub async fn len(&self) -> usize { self.catalog.read().await.events.len() }

    pub async fn is_empty(&self) -> bool { self.len().await == 0 }

    /// Conjunction of the given filters, catalog order.
    #[instrument(skip(self))]
    pub async fn find_with_filters(
        &self, category: Option<Category>, featured: Option<bool>,
        hot: Option<bool>,
    ) -> Vec<Event> {
        let filters = ListEventsQuery {
            category,
            featured,
            hot,
        };
        let catalog = self.catalog.read().await;
        catalog.filtered(|event| filters.matches(event))
    }

    #[instrument(skip(self))]
    pub async fn find_by_category(&self, category: Category) -> Vec<Event> {
        self.find_with_filters(Some(category), None, None).await
    }

    #[instrument(skip(self))]
    pub async fn find_featured(&self) -> Vec<Event> {
        self.find_with_filters(None, Some(true), None).await
    }

    #[instrument(skip(self))]
    pub async fn find_hot(&self) -> Vec<Event> {
        self.find_with_filters(None, None, Some(true)).await
    }

    /// Case-insensitive substring search over title, description,
    /// category, tags and city. The query is matched as given; a blank
    /// query matches every event.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Vec<Event> {
        let needle = if query.trim().is_empty() {
            String::new()
        }
        else {
            query.to_lowercase()
        };
        let catalog = self.catalog.read().await;
        catalog.filtered(|event| event.matches_search(&needle))
    }

    /// Events within `radius` of `origin`, nearest first. Equal distances
    /// keep catalog order.
    #[instrument(skip(self))]
    pub async fn find_nearby(
        &self, origin: Coordinates, radius: RadiusFilter,
    ) -> Vec<NearbyEvent> {
        let catalog = self.catalog.read().await;
        let mut nearby: Vec<NearbyEvent> = catalog
            .events
            .iter()
            .filter_map(|event| {
                let distance_km = origin.distance_to(&event.coordinates());
                radius.admits(distance_km).then(|| {
                    NearbyEvent {
                        event: event.clone(),
                        distance_km,
                    }
                })
            })
            .collect();
        drop(catalog);

        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        debug!(matches = nearby.len(), "Nearby events resolved");
        nearby
    }

    /// Adds `attendee` to the event. Joining twice returns the unchanged
    /// record with [`JoinOutcome::AlreadyAttending`]; a full event is
    /// rejected without being modified.
    #[instrument(skip(self, attendee), fields(attendee_id = %attendee.id))]
    pub async fn join(
        &self, event_id: &str, attendee: Attendee,
    ) -> Result<(Event, JoinOutcome), EventError> {
        let mut catalog = self.catalog.write().await;
        let event = catalog
            .get_mut(event_id)
            .ok_or_else(|| EventError::not_found(event_id))?;

        match event.add_attendee(attendee) {
            JoinOutcome::Joined => {
                info!(
                    available_spots = event.available_spots(),
                    "Attendee joined event"
                );
                Ok((event.clone(), JoinOutcome::Joined))
            }
            JoinOutcome::AlreadyAttending => {
                debug!("Attendee already on the list");
                Ok((event.clone(), JoinOutcome::AlreadyAttending))
            }
            JoinOutcome::Full => {
                warn!(capacity = event.capacity, "Event is at full capacity");
                Err(EventError::CapacityExceeded {
                    event_id: event.id.clone(),
                    capacity: event.capacity,
                })
            }
        }
    }

    /// Returns the event's shareable link, deriving it from `base_url` on
    /// first use. Later calls return the stored link unchanged.
    #[instrument(skip(self))]
    pub async fn generate_shareable_link(
        &self, event_id: &str, base_url: &str,
    ) -> Result<String, EventError> {
        {
            let catalog = self.catalog.read().await;
            let event = catalog
                .get(event_id)
                .ok_or_else(|| EventError::not_found(event_id))?;
            if let Some(link) = event.shareable_link() {
                debug!("Shareable link already stored");
                return Ok(link.to_string());
            }
        }

        let mut catalog = self.catalog.write().await;
        let event = catalog
            .get_mut(event_id)
            .ok_or_else(|| EventError::not_found(event_id))?;
        let link = event.ensure_shareable_link(base_url).to_string();
        info!(%link, "Shareable link generated");
        Ok(link)
    }

    /// Generates links for every event that has none yet. Returns how many
    /// were generated.
    #[instrument(skip(self))]
    pub async fn generate_missing_shareable_links(
        &self, base_url: &str,
    ) -> usize {
        let mut catalog = self.catalog.write().await;
        let mut generated = 0;
        for event in catalog.events.iter_mut() {
            if event.shareable_link().is_none() {
                event.ensure_shareable_link(base_url);
                generated += 1;
            }
        }
        info!(generated, "Shareable links generated for catalog");
        generated
    }
}

#[async_trait]
impl GenericDao for EventDao {
    type CreateRequest = Event;
    type Error = EventError;
    type ID = str;
    type Model = Event;

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Event, EventError> {
        let catalog = self.catalog.read().await;
        catalog
            .get(id)
            .cloned()
            .ok_or_else(|| EventError::not_found(id))
    }

    async fn all(&self) -> Result<Vec<Event>, EventError> {
        Ok(self.catalog.read().await.events.clone())
    }

    #[instrument(skip(self, req), fields(event_id = %req.id))]
    async fn create(&self, req: Event) -> Result<Event, EventError> {
        let mut catalog = self.catalog.write().await;
        catalog.insert(req.clone())?;
        info!("Event added to catalog");
        Ok(req)
    }
}
