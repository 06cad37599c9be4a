use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use entity::sea_orm_active_enums::Role;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::{
        flash::flash_outcome,
        get_user::{get_optional_user, get_user_from_session},
        page::page_context,
    },
    error::Error,
    model::{
        app::AppState,
        session::{flash::SessionFlash, user::SessionUserId},
    },
    service::auth::AuthService,
    view::{self, render},
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Start page, sends each visitor to the area for their role
///
/// # Responses
/// - 303 (See Other): `/admin/apps` for admins, `/author/contracts` for authors, `/login` otherwise
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Redirect, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok(match user.role {
        Role::Admin => Redirect::to("/admin/apps"),
        Role::Author => Redirect::to("/author/contracts"),
    })
}

/// Login form, logged in users are sent to the start page
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    if get_optional_user(&state, &session).await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let ctx = page_context(&state, &session, None).await?;

    Ok(render(view::auth::login_page(&ctx)).into_response())
}

/// Checks credentials and stores the user ID in the session
///
/// # Responses
/// - 303 (See Other): `/` on success, `/login` with an error flash otherwise
/// - 500 (Internal Server Error): Session failure
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, Error> {
    match AuthService::new(&state.db)
        .login(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            SessionUserId::insert(&session, user.id).await?;
            SessionFlash::success(&session, "Logged in").await?;

            Ok(Redirect::to("/"))
        }
        Err(err) => {
            flash_outcome(&session, Err(err)).await?;

            Ok(Redirect::to("/login"))
        }
    }
}

pub async fn register_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    if get_optional_user(&state, &session).await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let ctx = page_context(&state, &session, None).await?;

    Ok(render(view::auth::register_page(&ctx)).into_response())
}

/// Registers an author account
///
/// # Responses
/// - 303 (See Other): `/login` after registering, `/register` with an error flash otherwise
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, Error> {
    let outcome = AuthService::new(&state.db)
        .register(&form.username, &form.password)
        .await
        .map(|_| "Registration complete, please log in".to_string());

    if flash_outcome(&session, outcome).await? {
        Ok(Redirect::to("/login"))
    } else {
        Ok(Redirect::to("/register"))
    }
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 303 (See Other): Redirect to the login page with a "Logged out" flash
pub async fn logout(session: Session) -> Result<Redirect, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    if maybe_user_id.is_some() {
        session.clear().await;
    }

    SessionFlash::info(&session, "Logged out").await?;

    Ok(Redirect::to("/login"))
}
