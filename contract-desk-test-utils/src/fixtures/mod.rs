//! Fixture helpers for inserting database rows during tests.
//!
//! - `user` - admin and author accounts with a known password
//! - `contract` - applications, books, royalties and notifications

pub mod contract;
pub mod user;
