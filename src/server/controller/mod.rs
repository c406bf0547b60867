//! HTTP handlers.
//!
//! Controllers check access with `AuthGuard`, turn DTOs into domain parameters, call a
//! service and convert the result back into DTOs.

pub mod auth;
pub mod event;
pub mod guild;
