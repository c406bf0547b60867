pub use super::event::Entity as Event;
pub use super::guild::Entity as Guild;
pub use super::user::Entity as User;
