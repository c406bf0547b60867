use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDto, WeeklyEventsDto},
        guild::GuildDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{event::EventService, guild::GuildService},
        state::AppState,
        util::parse::parse_timezone,
    },
};

pub static GUILD_TAG: &str = "guild";

/// Optional week selection; missing values default to the current ISO week.
#[derive(Deserialize, IntoParams)]
pub struct WeeklyQuery {
    /// ISO week-numbering year
    pub year: Option<i32>,
    /// ISO week, 1 to 52
    pub week: Option<u32>,
    /// IANA zone of the week boundaries, defaults to the guild's timezone
    pub timezone: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "All known guilds", body = Vec<GuildDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let guilds: Vec<GuildDto> = GuildService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|guild| guild.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(guilds)))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild", body = GuildDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let guild = GuildService::new(&state.db).get_by_id(guild_id).await?;

    Ok((StatusCode::OK, Json(guild.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/events",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Events of the guild ordered by date", body = Vec<EventDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_events(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events: Vec<EventDto> = EventService::new(&state.db)
        .get_by_guild(guild_id)
        .await?
        .into_iter()
        .map(|event| event.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(events)))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/events/weekly",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        WeeklyQuery
    ),
    responses(
        (status = 200, description = "Events within the ISO week", body = WeeklyEventsDto),
        (status = 400, description = "Invalid week number or timezone", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_weekly_events(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(query): Query<WeeklyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let timezone = query.timezone.as_deref().map(parse_timezone).transpose()?;

    let (range, events) = EventService::new(&state.db)
        .get_weekly(guild_id, query.year, query.week, timezone)
        .await?;

    Ok((
        StatusCode::OK,
        Json(WeeklyEventsDto {
            year: range.year,
            week: range.week,
            timezone: range.start.timezone().name().to_string(),
            start: range.start.fixed_offset(),
            end: range.end.fixed_offset(),
            events: events.into_iter().map(|event| event.into_dto()).collect(),
        }),
    ))
}
