use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_page;

/// Validation and state machine failures for applications, books and royalties.
///
/// The `Display` text of every variant is shown to the visitor as a flash message.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Enter a {0}")]
    MissingField(&'static str),
    #[error("Choose a valid contract type")]
    InvalidContractType,
    #[error("Enter a valid amount")]
    InvalidAmount,
    #[error("A buyout amount is required")]
    BuyoutAmountRequired,
    #[error("Month must be formatted as YYYY-MM, got {0:?}")]
    InvalidMonth(String),
    #[error("Select a valid {0}")]
    InvalidId(&'static str),
    #[error("Application not found")]
    ApplicationNotFound(i32),
    #[error("Application has already been processed")]
    ApplicationAlreadyProcessed(i32),
    #[error("Book not found")]
    BookNotFound(i32),
    #[error("Only guaranteed contracts take monthly royalties")]
    NotGuaranteed(i32),
}

impl IntoResponse for ContractError {
    fn into_response(self) -> Response {
        match self {
            Self::ApplicationNotFound(id) | Self::BookNotFound(id) => {
                tracing::debug!(id = %id, "{}", self);

                error_page(StatusCode::NOT_FOUND, &self.to_string())
            }
            err => error_page(StatusCode::BAD_REQUEST, &err.to_string()),
        }
    }
}
