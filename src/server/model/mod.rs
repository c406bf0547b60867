//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! turned into DTOs at the controller boundary.

pub mod event;
pub mod guild;
pub mod user;
pub mod week;
