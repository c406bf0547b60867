use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FormErrorDto, GenerationLimitDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{NewEvent, UpdateEventParam},
        service::event::EventService,
        state::AppState,
        util::parse::{parse_event_ref, EventRef},
    },
};

pub static EVENT_TAG: &str = "event";

#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events ordered by date", body = Vec<EventDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events: Vec<EventDto> = EventService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|event| event.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(events)))
}

/// `GET /api/events/{id}` returns the event, `GET /api/events/{id}:next` returns
/// the occurrence following it, generating it when needed.
#[utoipa::path(
    get,
    path = "/api/events/{event_ref}",
    tag = EVENT_TAG,
    params(
        ("event_ref" = String, Path, description = "Event ID, or `{id}:next` for its next occurrence")
    ),
    responses(
        (status = 200, description = "Event or next occurrence", body = EventDto),
        (status = 400, description = "Next occurrence is beyond the generation limit", body = GenerationLimitDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 412, description = "Event is not repeated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_ref): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event_service = EventService::new(&state.db).with_generation_limit(state.generation_limit);

    let event = match parse_event_ref(&event_ref)? {
        EventRef::Event(id) => event_service.get_by_id(id).await?,
        EventRef::NextOccurrence(id) => event_service.get_next_occurrence(id).await?,
    };

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/events",
    tag = EVENT_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateEventDto,
    responses(
        (status = 200, description = "Created event", body = EventDto),
        (status = 400, description = "Invalid event form", body = FormErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let new_event = NewEvent::from_dto(guild_id, payload)?;

    let event = EventService::new(&state.db).create(new_event).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/events/{id}",
    tag = EVENT_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 400, description = "Invalid event form", body = FormErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found in guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, id)): Path<(u64, i32)>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateEventParam::from_dto(payload)?;

    let event = EventService::new(&state.db)
        .update(guild_id, id, param)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/events/{id}",
    tag = EVENT_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found in guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    EventService::new(&state.db).delete(guild_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
