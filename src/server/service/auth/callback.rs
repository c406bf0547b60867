use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serenity::all::User as DiscordUser;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    service::auth::DiscordAuthService,
};

const DISCORD_CURRENT_USER_URL: &str = "https://discord.com/api/users/@me";

impl<'a> DiscordAuthService<'a> {
    /// Exchanges the authorization code and stores the Discord user.
    ///
    /// The first user to log in while no admin exists becomes admin.
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let is_admin = if user_repo.admin_exists().await? {
            None
        } else {
            tracing::info!(
                "No admin exists yet, granting admin to {}",
                discord_user.name
            );
            Some(true)
        };

        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get(),
                name: discord_user
                    .global_name
                    .clone()
                    .unwrap_or_else(|| discord_user.name.clone()),
                is_admin,
            })
            .await?;

        Ok(user)
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(DISCORD_CURRENT_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
