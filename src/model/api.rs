use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of a rejected form submission, keyed by field name.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FormErrorDto {
    pub error: String,
    pub form_errors: BTreeMap<String, Vec<String>>,
}

/// Body returned when the next occurrence lies beyond the generation limit.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerationLimitDto {
    pub error: String,
    pub max_period_seconds: i64,
}
