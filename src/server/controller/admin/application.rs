use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use entity::sea_orm_active_enums::{ContractType, Role};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::{flash::flash_outcome, get_user::require_role, page::page_context},
    error::{contract::ContractError, Error},
    model::app::AppState,
    service::application::ApplicationService,
    util::form::parse_id,
    view::{self, render},
};

/// Form posted from each row of the application list.
///
/// `action` is `approve_app` or `reject_app`. `buyout_amount` is only read when approving a
/// buyout application and `reason` only when rejecting.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ApplicationActionForm {
    pub action: String,
    pub app_id: String,
    pub buyout_amount: Option<String>,
    pub reason: String,
}

pub async fn applications_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let user = require_role(&state, &session, Role::Admin).await?;

    let applications = ApplicationService::new(&state.db).list_all().await?;

    let ctx = page_context(&state, &session, Some(user)).await?;

    Ok(render(view::admin::applications_page(&ctx, &applications)))
}

/// Approves or rejects an application
///
/// # Responses
/// - 303 (See Other): Back to `/admin/apps` with a flash describing the outcome
pub async fn process_application(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ApplicationActionForm>,
) -> Result<Redirect, Error> {
    let admin = require_role(&state, &session, Role::Admin).await?;

    let outcome = match form.action.as_str() {
        "approve_app" => approve(&state, admin.id, &form).await,
        "reject_app" => reject(&state, admin.id, &form).await,
        _ => Err(ContractError::InvalidId("action").into()),
    };

    flash_outcome(&session, outcome).await?;

    Ok(Redirect::to("/admin/apps"))
}

async fn approve(
    state: &AppState,
    admin_id: i32,
    form: &ApplicationActionForm,
) -> Result<String, Error> {
    let application_id = parse_id(&form.app_id, "application")?;

    let book = ApplicationService::new(&state.db)
        .approve(admin_id, application_id, form.buyout_amount.as_deref())
        .await?;

    let message = match book.contract_type {
        ContractType::Buyout => "Buyout approved and author notified",
        ContractType::Guaranteed => "Guaranteed contract approved and author notified",
    };

    Ok(message.to_string())
}

async fn reject(
    state: &AppState,
    admin_id: i32,
    form: &ApplicationActionForm,
) -> Result<String, Error> {
    let application_id = parse_id(&form.app_id, "application")?;

    ApplicationService::new(&state.db)
        .reject(admin_id, application_id, &form.reason)
        .await?;

    Ok("Application rejected and author notified".to_string())
}
