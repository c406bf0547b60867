use axum::{
    routing::{get, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, FormErrorDto, GenerationLimitDto},
        event::{
            CreateEventDto, EventDto, RepetitionFrequency, UpdateEventDto, WeeklyEventsDto,
        },
        guild::GuildDto,
        user::UserDto,
    },
    server::{
        controller::{
            auth::{self, callback, get_user, login, logout, AUTH_TAG},
            event::{self, create_event, delete_event, get_event, get_events, update_event, EVENT_TAG},
            guild::{self, get_guild, get_guild_events, get_guilds, get_weekly_events, GUILD_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guildboard", description = "Guild events and Discord bot backend"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        event::get_events,
        event::get_event,
        event::create_event,
        event::update_event,
        event::delete_event,
        guild::get_guilds,
        guild::get_guild,
        guild::get_guild_events,
        guild::get_weekly_events,
    ),
    components(schemas(
        ErrorDto,
        FormErrorDto,
        GenerationLimitDto,
        EventDto,
        CreateEventDto,
        UpdateEventDto,
        WeeklyEventsDto,
        RepetitionFrequency,
        GuildDto,
        UserDto,
    )),
    tags(
        (name = AUTH_TAG, description = "Discord login"),
        (name = EVENT_TAG, description = "Guild events and recurring occurrences"),
        (name = GUILD_TAG, description = "Guilds known to the bot")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/events", get(get_events))
        .route("/api/events/{event_ref}", get(get_event))
        .route("/api/guilds", get(get_guilds))
        .route("/api/guilds/{guild_id}", get(get_guild))
        .route(
            "/api/guilds/{guild_id}/events",
            put(create_event).get(get_guild_events),
        )
        .route("/api/guilds/{guild_id}/events/weekly", get(get_weekly_events))
        .route(
            "/api/guilds/{guild_id}/events/{id}",
            axum::routing::patch(update_event).delete(delete_event),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
