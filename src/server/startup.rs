use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite database.
///
/// Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// HTTP client for Discord API calls.
///
/// Redirects are disabled so a compromised response cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid_url = |name: &str, value: &str, err: url::ParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: err.to_string(),
    };

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone())
                .map_err(|e| invalid_url("DISCORD_AUTH_URL", &config.discord_auth_url, e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone())
                .map_err(|e| invalid_url("DISCORD_TOKEN_URL", &config.discord_token_url, e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|e| {
                invalid_url("DISCORD_REDIRECT_URL", &config.discord_redirect_url, e)
            })?,
        );

    Ok(client)
}
