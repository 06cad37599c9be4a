use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::notification::NotificationService,
        view::PageContext,
    },
};

/// Collects the pending flash messages and, for authors, the unread notification count.
pub async fn page_context(
    state: &AppState,
    session: &Session,
    user: Option<UserDto>,
) -> Result<PageContext, Error> {
    let flashes = SessionFlash::take(session).await?;

    let unread_notifications = match &user {
        Some(user) if user.role == Role::Author => {
            NotificationService::new(&state.db)
                .count_unread(user.id)
                .await?
        }
        _ => 0,
    };

    Ok(PageContext {
        user,
        flashes,
        unread_notifications,
    })
}
