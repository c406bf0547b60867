//! Guildboard Test Utils
//!
//! Shared helpers for the guildboard test suites. Tests get an in-memory SQLite database
//! (and optionally a session backed by it) with only the tables they ask for, plus
//! factories that insert rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn lists_guild_events() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_event_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (guild, event) = factory::helpers::create_event_with_guild(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
