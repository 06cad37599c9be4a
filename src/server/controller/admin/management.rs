use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Role;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::{
        flash::flash_outcome, get_user::get_optional_user, page::page_context,
    },
    error::Error,
    model::{
        app::AppState,
        session::{flash::SessionFlash, management::SessionAdminVerified},
    },
    service::user::UserService,
    util::form::parse_id,
    view::{self, render},
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct AccessKeyForm {
    pub access_key: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RegisterAdminForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DeleteAdminForm {
    pub admin_id: String,
    pub delete_key: String,
}

/// Admin account management, shows the admin list once the access key was entered
///
/// Reachable without logging in so the first admin can be created on a fresh deployment.
pub async fn management_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let user = get_optional_user(&state, &session).await?;
    let verified = SessionAdminVerified::get(&session).await?;

    let admins = if verified {
        UserService::new(&state.db).list_admins().await?
    } else {
        Vec::new()
    };

    let ctx = page_context(&state, &session, user).await?;

    Ok(render(view::admin::management_page(&ctx, verified, &admins)))
}

/// Checks the access key and marks the session as verified
pub async fn verify_access_key(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AccessKeyForm>,
) -> Result<Redirect, Error> {
    if state.admin_keys.access_key.is_none() {
        tracing::warn!("Admin access key submitted but ADMIN_ACCESS_KEY is not configured");
    }

    let outcome = match state.admin_keys.verify_access_key(&form.access_key) {
        Ok(()) => SessionAdminVerified::insert(&session)
            .await
            .map(|_| "Access key verified".to_string()),
        Err(err) => Err(err.into()),
    };

    flash_outcome(&session, outcome).await?;

    Ok(Redirect::to("/admin/management"))
}

/// Creates an admin account from a verified session
pub async fn register_admin(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterAdminForm>,
) -> Result<Redirect, Error> {
    let outcome = create_admin(&state, &session, &form).await;
    flash_outcome(&session, outcome).await?;

    Ok(Redirect::to("/admin/management"))
}

async fn create_admin(
    state: &AppState,
    session: &Session,
    form: &RegisterAdminForm,
) -> Result<String, Error> {
    SessionAdminVerified::require(session).await?;

    UserService::new(&state.db)
        .create_user(&form.username, &form.password, Role::Admin)
        .await?;

    Ok("Admin account created".to_string())
}

/// Deletes an admin account, requires a verified session and the delete key
pub async fn delete_admin(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteAdminForm>,
) -> Result<Redirect, Error> {
    let outcome = remove_admin(&state, &session, &form).await;
    flash_outcome(&session, outcome).await?;

    Ok(Redirect::to("/admin/management"))
}

async fn remove_admin(
    state: &AppState,
    session: &Session,
    form: &DeleteAdminForm,
) -> Result<String, Error> {
    SessionAdminVerified::require(session).await?;
    state.admin_keys.verify_delete_key(&form.delete_key)?;

    let admin_id = parse_id(&form.admin_id, "admin")?;
    let actor_id = get_optional_user(state, session).await?.map(|user| user.id);

    let deleted = UserService::new(&state.db)
        .delete_admin(actor_id, admin_id)
        .await?;

    Ok(format!("Admin {} deleted", deleted.username))
}

/// Ends the verified management session, the login session is kept
pub async fn end_verification(session: Session) -> Result<Redirect, Error> {
    SessionAdminVerified::remove(&session).await?;
    SessionFlash::info(&session, "Admin verification ended").await?;

    Ok(Redirect::to("/admin/management"))
}
