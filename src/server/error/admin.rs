use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::server::error::error_page;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("You cannot delete your own account")]
    CannotDeleteSelf,
    #[error("User not found")]
    UserNotFound(i32),
    #[error("Only admin accounts can be deleted")]
    NotAnAdmin(i32),
    #[error("Access key is incorrect")]
    AccessKeyInvalid,
    #[error("Delete key is incorrect")]
    DeleteKeyInvalid,
    #[error("Verify the access key first")]
    NotVerified,
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            Self::NotVerified => Redirect::to("/admin/management").into_response(),
            Self::UserNotFound(_) => error_page(StatusCode::NOT_FOUND, &self.to_string()),
            err => error_page(StatusCode::BAD_REQUEST, &err.to_string()),
        }
    }
}
