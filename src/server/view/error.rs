use axum::http::StatusCode;
use maud::{html, Markup};

use crate::server::view::{layout::page, PageContext};

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");

    page(
        title,
        &PageContext::default(),
        html! {
            p class="error-code" { (status.as_u16()) }
            p { (message) }
            p { a href="/" { "Back to the start page" } }
        },
    )
}

pub fn not_found_page() -> Markup {
    error_page(StatusCode::NOT_FOUND, "The page you were looking for does not exist.")
}
