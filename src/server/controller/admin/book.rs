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
    service::book::BookService,
    util::form::parse_id,
    view::{self, render},
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DeleteBookForm {
    pub book_id: String,
}

pub async fn books_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let user = require_role(&state, &session, Role::Admin).await?;

    let books = BookService::new(&state.db).list_all().await?;

    let ctx = page_context(&state, &session, Some(user)).await?;

    Ok(render(view::admin::books_page(&ctx, &books)))
}

/// Deletes a book together with its royalty records
pub async fn delete_book(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteBookForm>,
) -> Result<Redirect, Error> {
    require_role(&state, &session, Role::Admin).await?;

    let outcome = match parse_id(&form.book_id, "book") {
        Ok(book_id) => BookService::new(&state.db)
            .delete_book(book_id)
            .await
            .map(|_| "Book and its royalty records deleted".to_string()),
        Err(err) => Err(err.into()),
    };

    flash_outcome(&session, outcome).await?;

    Ok(Redirect::to("/admin/books"))
}
