//! Server-rendered HTML views.
//!
//! Pages are maud templates that take a [`PageContext`] and the data prepared by services.
//! Controllers turn the returned [`Markup`] into a response with [`render`].

pub mod admin;
pub mod auth;
pub mod author;
pub mod error;
pub mod layout;

use axum::response::Html;
use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{ApplicationStatus, ContractType};
use maud::Markup;

use crate::{
    model::user::UserDto,
    server::{model::session::flash::FlashMessage, util::form::format_amount},
};

/// State shared by every page: the logged in user, pending flash messages and the unread
/// notification count shown in the navigation.
#[derive(Clone, Debug, Default)]
pub struct PageContext {
    pub user: Option<UserDto>,
    pub flashes: Vec<FlashMessage>,
    pub unread_notifications: u64,
}

pub fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

pub(crate) fn datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub(crate) fn money(amount: f64) -> String {
    format!("¥{}", format_amount(amount))
}

pub(crate) fn contract_label(contract_type: ContractType) -> &'static str {
    match contract_type {
        ContractType::Guaranteed => "Guaranteed",
        ContractType::Buyout => "Buyout",
    }
}

pub(crate) fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "Pending",
        ApplicationStatus::Approved => "Approved",
        ApplicationStatus::Rejected => "Rejected",
    }
}
