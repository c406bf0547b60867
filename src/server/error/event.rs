use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::TimeDelta;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::api::{ErrorDto, FormErrorDto, GenerationLimitDto};

/// Failures of event validation, date handling and occurrence generation.
#[derive(Error, Debug, PartialEq)]
pub enum EventError {
    /// The date string could not be turned into a zoned instant.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The event does not repeat so it has no next occurrence. Permanent for this event.
    #[error("Event {0} is not repeated")]
    NotRepeated(i32),

    /// The next occurrence lies further past the series' authored date than
    /// generation is allowed to reach. Permanent for the series.
    #[error("Next occurrence is more than {} seconds past the series origin", .max_period.num_seconds())]
    GenerationLimitExceeded { max_period: TimeDelta },

    /// ISO week numbers are accepted in `1..=52`.
    #[error("Invalid week number {0}, expected a value between 1 and 52")]
    InvalidWeekNumber(u32),

    /// Not an IANA timezone name.
    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),

    /// Form validation failed; messages are keyed by field name.
    #[error("Invalid request")]
    InvalidForm(BTreeMap<String, Vec<String>>),
}

/// Converts event errors into HTTP responses.
///
/// # Returns
/// - 412 Precondition Failed - For `NotRepeated`
/// - 400 Bad Request - For every other variant; `GenerationLimitExceeded` adds
///   `max_period_seconds` and `InvalidForm` adds `form_errors` to the body
impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            Self::NotRepeated(_) => (
                StatusCode::PRECONDITION_FAILED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::GenerationLimitExceeded { max_period } => (
                StatusCode::BAD_REQUEST,
                Json(GenerationLimitDto {
                    error: "Generation limit exceeded".to_string(),
                    max_period_seconds: max_period.num_seconds(),
                }),
            )
                .into_response(),
            Self::InvalidForm(form_errors) => (
                StatusCode::BAD_REQUEST,
                Json(FormErrorDto {
                    error: "Invalid request".to_string(),
                    form_errors,
                }),
            )
                .into_response(),
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
