use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use entity::sea_orm_active_enums::Role;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::{flash::flash_outcome, get_user::require_role, page::page_context},
    error::Error,
    model::{app::AppState, session::flash::SessionFlash},
    service::royalty::RoyaltyService,
    util::{
        form::{parse_amount, parse_id},
        time::{current_month_key, validate_month},
    },
    view::{self, render},
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct MonthQuery {
    pub month: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RoyaltyForm {
    pub book_id: String,
    pub amount: String,
    pub month: String,
}

/// Picks the requested month, falling back to the current one when it is missing or invalid.
fn month_or_current(month: Option<&str>) -> Result<String, Error> {
    match month.map(str::trim).filter(|month| !month.is_empty()) {
        Some(month) => {
            validate_month(month)?;

            Ok(month.to_string())
        }
        None => Ok(current_month_key()),
    }
}

/// Guaranteed books with the royalty recorded for `?month=YYYY-MM`
///
/// An invalid month is flashed and replaced by the current month.
pub async fn royalties_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MonthQuery>,
) -> Result<Html<String>, Error> {
    let user = require_role(&state, &session, Role::Admin).await?;

    let month = match month_or_current(query.month.as_deref()) {
        Ok(month) => month,
        Err(err) => {
            if let Some(message) = err.user_message() {
                SessionFlash::error(&session, message).await?;
            }

            current_month_key()
        }
    };

    let rows = RoyaltyService::new(&state.db).admin_overview(&month).await?;

    let ctx = page_context(&state, &session, Some(user)).await?;

    Ok(render(view::admin::royalties_page(&ctx, &month, &rows)))
}

/// Sets the monthly royalty of a guaranteed book
///
/// # Responses
/// - 303 (See Other): Back to the royalty list of the submitted month, or the current month
///   when the submitted one is invalid
pub async fn set_royalty(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RoyaltyForm>,
) -> Result<Redirect, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let month = match form.month.trim() {
        "" => current_month_key(),
        month => month.to_string(),
    };

    let outcome = store_royalty(&state, &form, &month).await;
    flash_outcome(&session, outcome).await?;

    let redirect_month = match validate_month(&month) {
        Ok(()) => month,
        Err(_) => current_month_key(),
    };

    Ok(Redirect::to(&format!(
        "/admin/royalties?month={}",
        redirect_month
    )))
}

async fn store_royalty(state: &AppState, form: &RoyaltyForm, month: &str) -> Result<String, Error> {
    let book_id = parse_id(&form.book_id, "book")?;
    let amount = parse_amount(&form.amount)?;

    RoyaltyService::new(&state.db)
        .set_royalty(book_id, month, amount)
        .await?;

    Ok("Monthly royalty set and author notified".to_string())
}
