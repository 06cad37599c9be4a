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
    service::{
        application::ApplicationService, notification::NotificationService,
        royalty::RoyaltyService,
    },
    util::{form::parse_id, time::current_month_key},
    view::{self, render},
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ApplyForm {
    pub title: String,
    pub pen_name: String,
    pub contract_type: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct NotificationForm {
    pub id: String,
}

pub async fn author_home(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, Error> {
    require_role(&state, &session, Role::Author).await?;

    Ok(Redirect::to("/author/contracts"))
}

/// The author's books with this month's royalty and earlier months
pub async fn contracts(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let user = require_role(&state, &session, Role::Author).await?;

    let overview = RoyaltyService::new(&state.db)
        .contracts_overview(user.id, &current_month_key())
        .await?;

    let ctx = page_context(&state, &session, Some(user)).await?;

    Ok(render(view::author::contracts_page(&ctx, &overview)))
}

pub async fn apply_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let user = require_role(&state, &session, Role::Author).await?;

    let ctx = page_context(&state, &session, Some(user)).await?;

    Ok(render(view::author::apply_page(&ctx)))
}

/// Submits a contract application
///
/// # Responses
/// - 303 (See Other): `/author/results` once submitted, back to `/author/apply` with an error
///   flash when the form is incomplete
pub async fn apply(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ApplyForm>,
) -> Result<Redirect, Error> {
    let user = require_role(&state, &session, Role::Author).await?;

    let outcome = ApplicationService::new(&state.db)
        .submit(user.id, &form.title, &form.pen_name, &form.contract_type)
        .await
        .map(|_| "Application submitted, awaiting review".to_string());

    if flash_outcome(&session, outcome).await? {
        Ok(Redirect::to("/author/results"))
    } else {
        Ok(Redirect::to("/author/apply"))
    }
}

pub async fn results(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let user = require_role(&state, &session, Role::Author).await?;

    let applications = ApplicationService::new(&state.db)
        .list_for_author(user.id)
        .await?;

    let ctx = page_context(&state, &session, Some(user)).await?;

    Ok(render(view::author::results_page(&ctx, &applications)))
}

pub async fn notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let user = require_role(&state, &session, Role::Author).await?;

    let notifications = NotificationService::new(&state.db)
        .list_for_recipient(user.id)
        .await?;

    let ctx = page_context(&state, &session, Some(user)).await?;

    Ok(render(view::author::notifications_page(&ctx, &notifications)))
}

pub async fn mark_all_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, Error> {
    let user = require_role(&state, &session, Role::Author).await?;

    let outcome = NotificationService::new(&state.db)
        .mark_all_read(user.id)
        .await
        .map(|_| "All notifications marked as read".to_string());

    flash_outcome(&session, outcome).await?;

    Ok(Redirect::to("/author/notifications"))
}

/// Marks a single notification as read
///
/// Notifications of other users are left untouched without an error, the ID gives nothing away.
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NotificationForm>,
) -> Result<Redirect, Error> {
    let user = require_role(&state, &session, Role::Author).await?;

    match parse_id(&form.id, "notification") {
        Ok(notification_id) => {
            NotificationService::new(&state.db)
                .mark_read(user.id, notification_id)
                .await?;
        }
        Err(err) => {
            flash_outcome(&session, Err(err.into())).await?;
        }
    }

    Ok(Redirect::to("/author/notifications"))
}
