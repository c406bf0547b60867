use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{basic::BasicErrorResponse, HttpClientError, RequestTokenError};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session, the caller is not logged in.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(u64),

    /// The user lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - Discord id of the user
    /// - Description of the denied action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(u64, String),

    /// CSRF state in the OAuth callback does not match the one stored in the session.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No CSRF state was stored in the session before the callback.
    #[error("Failed to login user due to missing CSRF state in session")]
    CsrfMissingValue,

    /// Exchanging the authorization code for a token failed.
    #[error(transparent)]
    RequestTokenErr(
        #[from] RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>,
    ),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; details are logged at debug level.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures
/// - 401 Unauthorized - For missing or unknown session users
/// - 403 Forbidden - For denied permissions
/// - 500 Internal Server Error - For token exchange failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You must be logged in")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::CsrfValidationFailed | Self::CsrfMissingValue => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::RequestTokenErr(err) => {
                tracing::error!("Discord token exchange failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
