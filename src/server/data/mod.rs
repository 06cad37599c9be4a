//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over `ConnectionTrait`, so the same
//! queries run on the pooled connection or inside a transaction opened by a service.

pub mod application;
pub mod book;
pub mod notification;
pub mod royalty;
pub mod user;
