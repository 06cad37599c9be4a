//! Utility functions and helpers for server operations.
//!
//! Form field parsing, month key handling and password hashing shared by services and
//! controllers.

pub mod form;
pub mod password;
pub mod time;
