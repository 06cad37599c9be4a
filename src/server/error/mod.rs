//! Error types for the contract desk server.
//!
//! Domain errors live in their own submodules (authentication, configuration, contracts, admin
//! management) and are aggregated into [`Error`]. Every error implements `IntoResponse`, so
//! handlers can return `Result<_, Error>` and rely on `?` for both redirects and failures.

pub mod admin;
pub mod auth;
pub mod config;
pub mod contract;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{
    error::{admin::AdminError, auth::AuthError, config::ConfigError, contract::ContractError},
    view,
};

/// Main error type for the contract desk server.
///
/// Uses `thiserror`'s `#[from]` attribute so domain and library errors convert with `?`.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, credentials, role checks)
/// - Contract errors (form validation, application state machine, royalties)
/// - Admin errors (account management, access keys)
/// - External library errors (database, sessions, IO)
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    ContractError(#[from] ContractError),
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Internal error indicating a bug in the application's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Listener bind or serve failure.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Message that may be shown to the visitor verbatim.
    ///
    /// Returns `None` for database, session and other internal failures, which are logged and
    /// replaced with a generic message.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::AuthError(err) => err.user_message(),
            Self::ContractError(err) => Some(err.to_string()),
            Self::AdminError(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 303 See Other - Missing or stale sessions (to `/login`), wrong role (to `/`) and
///   unverified management access (to `/admin/management`)
/// - 400 Bad Request - Validation and business rule failures that reached the boundary
/// - 500 Internal Server Error - Everything else, logged at `error` level
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ContractError(err) => err.into_response(),
            Self::AdminError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Renders the error page for a user-facing failure with the given status.
pub(crate) fn error_page(status: StatusCode, message: &str) -> Response {
    (status, Html(view::error::error_page(status, message).into_string())).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the visitor only sees a generic page, so query details and
/// other internals never leak into the response.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
