use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Role;
use thiserror::Error;

use crate::server::error::{error_page, InternalServerError};

pub const FORBIDDEN_MESSAGE: &str = "You do not have permission to access that page";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User lacks the {} role required for this page", .0.as_str())]
    Forbidden(Role),
    #[error("Enter a username and password")]
    MissingCredentials,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl AuthError {
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Forbidden(_) => Some(FORBIDDEN_MESSAGE.to_string()),
            Self::MissingCredentials | Self::InvalidCredentials | Self::UsernameTaken => {
                Some(self.to_string())
            }
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::PasswordHash(_) => None,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Redirect::to("/login").into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Redirect::to("/login").into_response()
            }
            Self::Forbidden(_) => {
                tracing::debug!("{}", self);

                Redirect::to("/").into_response()
            }
            Self::MissingCredentials | Self::InvalidCredentials | Self::UsernameTaken => {
                error_page(StatusCode::BAD_REQUEST, &self.to_string())
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
