pub mod config;

use axum::{
    Router, extract::State, http::StatusCode, response::IntoResponse,
    routing::get,
};
use events_dao::EventDao;
use events_errors::EventError;
use events_http::{EventHandlers, EventServices};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use url::Url;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::config::ServerConfig;

/// Snapshot used when no seed file is configured.
pub const BUILTIN_SEED: &str = include_str!("../data/events.json");

/// Loads the catalog and derives a shareable link for every event.
pub async fn seed_catalog(
    config: &ServerConfig,
) -> Result<EventDao, EventError> {
    let dao = match &config.seed_path {
        Some(path) => EventDao::from_seed_file(path).await?,
        None => {
            let dao = EventDao::from_json(BUILTIN_SEED)?;
            info!(
                events = dao.len().await,
                "Catalog seeded from built-in snapshot"
            );
            dao
        }
    };

    dao.generate_missing_shareable_links(config.share_base_url.as_str())
        .await;
    Ok(dao)
}

pub fn app(event_dao: EventDao, share_base_url: Url) -> Router {
    let event_services =
        EventServices::new(event_dao.clone(), share_base_url);

    let api_routes = Router::new()
        .nest("/events", EventHandlers::routes())
        .with_state(event_services);

    let app = Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .with_state(event_dao)
        .merge(api_routes);

    app.merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        events_http::list_events,
        events_http::get_event,
        events_http::search_events,
        events_http::nearby_events,
        events_http::explore_events,
        events_http::create_event,
        events_http::join_event,
        events_http::share_event
    ),
    components(
        schemas(
            events_responses::EventResponse,
            events_responses::JoinEventResponse,
            events_responses::ShareLinkResponse,
            events_commands::CreateEventCommand,
            events_commands::JoinEventCommand,
            events_models::Category,
            common_errors::ApiErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Event discovery, joining and sharing")
    ),
    info(
        title = "Eventsify API",
        description = "Event discovery catalog",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check successful with catalog size", body = String)
    ),
    tag = "health"
)]
async fn health_check(
    State(event_dao): State<EventDao>,
) -> impl IntoResponse {
    let events = event_dao.len().await;
    (StatusCode::OK, format!("OK - {events} events in catalog"))
}
