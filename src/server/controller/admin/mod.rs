//! Admin area handlers.
//!
//! Every handler except the management page requires the admin role. The management page is
//! guarded by the access key kept in the session instead.

pub mod application;
pub mod book;
pub mod management;
pub mod royalty;
pub mod user;

use axum::{extract::State, response::Redirect};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::server::{controller::util::get_user::require_role, error::Error, model::app::AppState};

pub async fn admin_home(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, Error> {
    require_role(&state, &session, Role::Admin).await?;

    Ok(Redirect::to("/admin/apps"))
}
