//! Database repository layer.
//!
//! Repositories wrap SeaORM entity queries and hand domain models back to the
//! service layer, converting at the boundary.

pub mod event;
pub mod guild;
pub mod user;

#[cfg(test)]
mod test;
