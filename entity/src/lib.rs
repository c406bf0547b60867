//! SeaORM entity models for the guildboard database.
//!
//! Each module mirrors one table created by the `migration` crate. Entities are only
//! used by the repository layer of the server and by the test factories; services and
//! controllers work with the domain models built from them.

pub mod event;
pub mod guild;
pub mod prelude;
pub mod user;
