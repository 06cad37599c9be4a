//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main crate so fixtures and tests read the same.

pub type UserModel = entity::user::Model;

pub type ApplicationModel = entity::application::Model;

pub type BookModel = entity::book::Model;

pub type RoyaltyModel = entity::royalty::Model;

pub type NotificationModel = entity::notification::Model;
