//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted state, session and form values, then the
//! resulting response, session flashes and database rows are checked.

mod admin;
mod auth;
mod author;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use contract_desk::server::model::app::AppState;
use contract_desk_test_utils::prelude::*;

use crate::util::{flashes, location, login_as};
