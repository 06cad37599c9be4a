use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            session::{flash::SessionFlash, user::SessionUserId},
        },
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::warn!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Like [`get_user_from_session`] but treats a missing or stale session as anonymous.
pub async fn get_optional_user(
    state: &AppState,
    session: &Session,
) -> Result<Option<UserDto>, Error> {
    match get_user_from_session(state, session).await {
        Ok(user) => Ok(Some(user)),
        Err(Error::AuthError(AuthError::UserNotInSession | AuthError::UserNotInDatabase(_))) => {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Role gate for handlers.
///
/// # Returns
/// - `Ok(UserDto)`: Logged in user with the required role
/// - `Err(AuthError::UserNotInSession | AuthError::UserNotInDatabase)`: Redirects to `/login`
/// - `Err(AuthError::Forbidden)`: Flashes the permission error and redirects to `/`
pub async fn require_role(
    state: &AppState,
    session: &Session,
    role: Role,
) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;

    if user.role != role {
        let err = AuthError::Forbidden(role);
        if let Some(message) = err.user_message() {
            SessionFlash::error(session, message).await?;
        }

        return Err(err.into());
    }

    Ok(user)
}
