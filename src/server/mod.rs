//! Server application core modules.
//!
//! Everything behind the HTTP surface: configuration, routing, controllers, services,
//! repositories, session models, maud views and startup wiring.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
