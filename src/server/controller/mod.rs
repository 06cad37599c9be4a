//! HTTP controller endpoints.
//!
//! Axum handlers for authentication, the author area, the admin area and the admin
//! management page. Handlers check the session role, call services and either render a maud
//! view or flash the outcome of a form action and redirect.

pub mod admin;
pub mod auth;
pub mod author;
pub mod system;
pub mod util;
