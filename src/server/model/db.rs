//! Database model type aliases.
//!
//! Short names for the `entity` crate models used throughout the server.

/// User account, either an admin or an author.
pub type UserModel = entity::user::Model;

/// Contract application submitted by an author.
///
/// # Fields (from `entity::application::Model`)
/// - `status` - `pending` until an admin approves or rejects it, then fixed
/// - `reject_reason` - Only set for rejected applications
/// - `reviewer_id` - Admin who processed the application, cleared if that admin is deleted
/// - `processed_at` - Timestamp of the approval or rejection
pub type ApplicationModel = entity::application::Model;

/// Book created from an approved application.
///
/// `buyout_amount` is present exactly when the contract type is `buyout`.
pub type BookModel = entity::book::Model;

/// Royalty amount for one book in one month, unique per `(book_id, month)`.
pub type RoyaltyModel = entity::royalty::Model;

pub type NotificationModel = entity::notification::Model;
