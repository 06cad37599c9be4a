use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use entity::sea_orm_active_enums::Role;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::{flash::flash_outcome, get_user::require_role, page::page_context},
    error::Error,
    model::app::AppState,
    service::user::UserService,
    util::form::parse_id,
    view::{self, render},
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DeleteUserForm {
    pub user_id: String,
}

pub async fn users_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let user = require_role(&state, &session, Role::Admin).await?;

    let users = UserService::new(&state.db).list_users().await?;
    let current_user_id = user.id;

    let ctx = page_context(&state, &session, Some(user)).await?;

    Ok(render(view::admin::users_page(&ctx, &users, current_user_id)))
}

/// Deletes an admin account, admins cannot delete themselves
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteUserForm>,
) -> Result<Redirect, Error> {
    let admin = require_role(&state, &session, Role::Admin).await?;

    let outcome = match parse_id(&form.user_id, "user") {
        Ok(user_id) => UserService::new(&state.db)
            .delete_admin(Some(admin.id), user_id)
            .await
            .map(|_| "User deleted".to_string()),
        Err(err) => Err(err.into()),
    };

    flash_outcome(&session, outcome).await?;

    Ok(Redirect::to("/admin/users"))
}
