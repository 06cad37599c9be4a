//! Data transfer objects shared between services and views.

pub mod contract;
pub mod notification;
pub mod user;
