//! Session data models and utilities.
//!
//! Type-safe wrappers over tower-sessions for each piece of session state: the logged in
//! user ID, pending flash messages and the admin management verification flag.

pub mod flash;
pub mod management;
pub mod user;
