//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` function for
//! the common default case.
//!
//! ```rust,ignore
//! let guild = factory::create_guild(db).await?;
//! let event = factory::event::EventFactory::new(db, &guild.guild_id)
//!     .title("Raid night")
//!     .repetition("WEEKLY")
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod guild;
pub mod helpers;
pub mod user;

pub use event::create_event;
pub use guild::create_guild;
pub use user::create_user;
