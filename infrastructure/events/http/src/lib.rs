use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use common_errors::AppError;
use events_command_handlers::{
    CreateEventHandler, GenerateShareLinkHandler, JoinEventHandler,
};
use events_commands::{
    CreateEventCommand, GenerateShareLinkCommand, JoinEventCommand,
};
use events_dao::EventDao;
use events_models::Category;
use events_queries::{
    ExploreEventsQuery, GetEventQuery, ListEventsQuery, NearbyEventsQuery,
    SearchEventsQuery,
};
use events_query_handlers::{
    ExploreEventsQueryHandler, GetEventQueryHandler, ListEventsQueryHandler,
    NearbyEventsQueryHandler, SearchEventsQueryHandler,
};
use events_responses::{EventResponse, JoinEventResponse, ShareLinkResponse};
use serde::Deserialize;
use tracing::instrument;
use url::Url;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct EventServices {
    pub create_event: CreateEventHandler,
    pub join_event: JoinEventHandler,
    pub share_event: GenerateShareLinkHandler,

    pub get_event: GetEventQueryHandler,
    pub list_events: ListEventsQueryHandler,
    pub search_events: SearchEventsQueryHandler,
    pub nearby_events: NearbyEventsQueryHandler,
    pub explore_events: ExploreEventsQueryHandler,
}

impl EventServices {
    pub fn new(event_dao: EventDao, share_base_url: Url) -> Self {
        Self {
            create_event: CreateEventHandler::new(event_dao.clone()),
            join_event: JoinEventHandler::new(event_dao.clone()),
            share_event: GenerateShareLinkHandler::new(
                event_dao.clone(),
                share_base_url,
            ),
            get_event: GetEventQueryHandler::new(event_dao.clone()),
            list_events: ListEventsQueryHandler::new(event_dao.clone()),
            search_events: SearchEventsQueryHandler::new(event_dao.clone()),
            nearby_events: NearbyEventsQueryHandler::new(event_dao.clone()),
            explore_events: ExploreEventsQueryHandler::new(event_dao),
        }
    }
}

pub struct EventHandlers;

impl EventHandlers {
    /// Routes relative to the `/events` mount point.
    pub fn routes() -> Router<EventServices> {
        Router::new()
            .route("/", get(list_events))
            .route("/", post(create_event))
            .route("/nearby", get(nearby_events))
            .route("/explore", get(explore_events))
            .route("/search", get(search_events))
            .route("/{id}", get(get_event))
            .route("/{id}/join", post(join_event))
            .route("/{id}/share", post(share_event))
    }
}

fn invalid_query(rejection: QueryRejection) -> AppError {
    match rejection {
        QueryRejection::FailedToDeserializeQueryString(err) => {
            AppError::bad_request_with_details(
                "INVALID_QUERY_PARAMS",
                "Invalid query parameters provided",
                &err.body_text(),
            )
        }
        _ => {
            AppError::bad_request(
                "INVALID_QUERY_PARAMS",
                "Invalid query parameters provided",
            )
        }
    }
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::bad_request_with_details(
        "INVALID_REQUEST_BODY",
        "Invalid request body",
        &rejection.body_text(),
    )
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ListEventsParams {
    /// Display name, e.g. `Music` or `Food & Drink`. Case-insensitive.
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub hot: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/events",
    params(
        ListEventsParams
    ),
    responses(
        (status = 200, description = "List of events", body = Vec<EventResponse>),
        (status = 400, description = "Invalid query parameters", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_events(
    State(services): State<EventServices>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let Query(params) = params.map_err(invalid_query)?;

    // A blank category names no category, so nothing matches.
    if params.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
        return Ok(Json(Vec::new()));
    }

    let category = params
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|err| {
            AppError::bad_request("INVALID_CATEGORY", &err.to_string())
        })?;

    let query = ListEventsQuery {
        category,
        featured: params.featured,
        hot: params.hot,
    };
    let events = services.list_events.execute(query).await?;
    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn get_event(
    State(services): State<EventServices>, Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let query = GetEventQuery { event_id: id };
    let event = services.get_event.execute(query).await?;
    Ok(Json(event))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SearchParams {
    /// Free text. Blank lists every event.
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/events/search",
    params(
        SearchParams
    ),
    responses(
        (status = 200, description = "Matching events in catalog order", body = Vec<EventResponse>),
        (status = 400, description = "Invalid query parameters", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn search_events(
    State(services): State<EventServices>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let Query(params) = params.map_err(invalid_query)?;
    let events = services
        .search_events
        .execute(SearchEventsQuery::new(params.q))
        .await?;
    Ok(Json(events))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct NearbyParams {
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers. Defaults to 10; 0 disables the cutoff.
    pub radius_km: Option<f64>,
}

#[utoipa::path(
    get,
    path = "/events/nearby",
    params(
        NearbyParams
    ),
    responses(
        (status = 200, description = "Events within the radius, nearest first", body = Vec<EventResponse>),
        (status = 400, description = "Invalid query parameters", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Coordinates or radius out of range", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn nearby_events(
    State(services): State<EventServices>,
    params: Result<Query<NearbyParams>, QueryRejection>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let Query(params) = params.map_err(invalid_query)?;
    let query = NearbyEventsQuery {
        latitude: params.latitude,
        longitude: params.longitude,
        radius_km: params.radius_km,
    };
    let events = services.nearby_events.execute(query).await?;
    Ok(Json(events))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ExploreParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Kilometers. Defaults to 5; 0 disables the cutoff.
    pub radius_km: Option<f64>,
    pub q: Option<String>,
    /// Whole catalog in catalog order, no distances.
    #[serde(default)]
    pub show_all: bool,
}

#[utoipa::path(
    get,
    path = "/events/explore",
    params(
        ExploreParams
    ),
    responses(
        (status = 200, description = "Explore results", body = Vec<EventResponse>),
        (status = 400, description = "Invalid query parameters", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Coordinates or radius out of range", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn explore_events(
    State(services): State<EventServices>,
    params: Result<Query<ExploreParams>, QueryRejection>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let Query(params) = params.map_err(invalid_query)?;
    let query = ExploreEventsQuery {
        latitude: params.latitude,
        longitude: params.longitude,
        radius_km: params.radius_km,
        query: params.q,
        show_all: params.show_all,
    };
    let events = services.explore_events.execute(query).await?;
    Ok(Json(events))
}

#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventCommand,
    responses(
        (status = 201, description = "Event created successfully", body = EventResponse),
        (status = 400, description = "Invalid request data", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Validation error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn create_event(
    State(services): State<EventServices>,
    body: Result<Json<CreateEventCommand>, JsonRejection>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let Json(command) = body.map_err(invalid_body)?;
    let result = services.create_event.execute(command).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    post,
    path = "/events/{id}/join",
    request_body = JoinEventCommand,
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 201, description = "Attendee added", body = JoinEventResponse),
        (status = 200, description = "Attendee was already on the list", body = JoinEventResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 409, description = "Event is full", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Validation error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn join_event(
    State(services): State<EventServices>, Path(id): Path<String>,
    body: Result<Json<JoinEventCommand>, JsonRejection>,
) -> Result<(StatusCode, Json<JoinEventResponse>), AppError> {
    let Json(mut command) = body.map_err(invalid_body)?;
    command.event_id = id;

    let result = services.join_event.execute(command).await?;
    let status = if result.joined {
        StatusCode::CREATED
    }
    else {
        StatusCode::OK
    };
    Ok((status, Json(result)))
}

#[utoipa::path(
    post,
    path = "/events/{id}/share",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Shareable link", body = ShareLinkResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn share_event(
    State(services): State<EventServices>, Path(id): Path<String>,
) -> Result<Json<ShareLinkResponse>, AppError> {
    let command = GenerateShareLinkCommand { event_id: id };
    let result = services.share_event.execute(command).await?;
    Ok(Json(result))
}
