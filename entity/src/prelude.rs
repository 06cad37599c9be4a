pub use super::application::Entity as Application;
pub use super::book::Entity as Book;
pub use super::notification::Entity as Notification;
pub use super::royalty::Entity as Royalty;
pub use super::user::Entity as User;
