//! HTTP routing.
//!
//! Registers every page and form endpoint, the health probe, the static asset directory and a
//! fallback that renders the not found page.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::server::{controller, model::app::AppState};

/// Directory served under `/static`, relative to the working directory.
pub const STATIC_DIR: &str = "static";

/// Builds the application's router.
///
/// # Registered Endpoints
/// - `GET /`, `GET|POST /login`, `GET|POST /register`, `GET /logout`
/// - `GET /author`, `GET /author/contracts`, `GET|POST /author/apply`, `GET /author/results`,
///   `GET /author/notifications`, `POST /author/notifications/read`,
///   `POST /author/notifications/read_one`
/// - `GET /admin`, `GET|POST /admin/apps`, `GET|POST /admin/royalties`, `GET /admin/books`,
///   `POST /admin/books/delete`, `GET /admin/users`, `POST /admin/users/delete`
/// - `GET|POST /admin/management`, `POST /admin/register`, `POST /admin/delete`,
///   `POST /admin/logout`
/// - `GET /health`
///
/// # Example
/// ```ignore
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    use controller::{admin, auth, author, system};

    Router::new()
        .route("/", get(auth::index))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", get(auth::logout))
        .route("/author", get(author::author_home))
        .route("/author/contracts", get(author::contracts))
        .route("/author/apply", get(author::apply_page).post(author::apply))
        .route("/author/results", get(author::results))
        .route("/author/notifications", get(author::notifications))
        .route("/author/notifications/read", post(author::mark_all_read))
        .route("/author/notifications/read_one", post(author::mark_read))
        .route("/admin", get(admin::admin_home))
        .route(
            "/admin/apps",
            get(admin::application::applications_page)
                .post(admin::application::process_application),
        )
        .route(
            "/admin/royalties",
            get(admin::royalty::royalties_page).post(admin::royalty::set_royalty),
        )
        .route("/admin/books", get(admin::book::books_page))
        .route("/admin/books/delete", post(admin::book::delete_book))
        .route("/admin/users", get(admin::user::users_page))
        .route("/admin/users/delete", post(admin::user::delete_user))
        .route(
            "/admin/management",
            get(admin::management::management_page).post(admin::management::verify_access_key),
        )
        .route("/admin/register", post(admin::management::register_admin))
        .route("/admin/delete", post(admin::management::delete_admin))
        .route("/admin/logout", post(admin::management::end_verification))
        .route("/health", get(system::health))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(system::not_found)
}
