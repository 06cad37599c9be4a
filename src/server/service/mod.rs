//! Service layer for business logic.
//!
//! Services validate input, enforce the application state machine and open a transaction
//! whenever an operation changes more than one row. They call repositories from
//! [`crate::server::data`] and return DTOs from [`crate::model`].

pub mod application;
pub mod auth;
pub mod book;
pub mod notification;
pub mod royalty;
pub mod user;
