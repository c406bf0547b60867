//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers (and bot commands) and repositories. They work
//! with domain models, enforce business rules, and compose repository calls.

pub mod auth;
pub mod event;
pub mod guild;

#[cfg(test)]
mod test;
