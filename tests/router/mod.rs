//! Requests sent through the full router with the session layer applied.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use contract_desk::server::{
    config::Config, model::app::AppState, service::notification::NotificationService, startup,
};
use contract_desk_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::location;

fn app(test: &TestContext) -> Router {
    let config = Config::from_vars(|_| None).unwrap();
    let session = startup::session_layer(&config).unwrap();

    startup::build_app(test.to_app_state::<AppState>(), session)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test).oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test).oneshot(get("/no/such/page")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn protected_page_redirects_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test).oneshot(get("/author/contracts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    Ok(())
}

#[tokio::test]
async fn login_page_renders() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test).oneshot(get("/login")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn login_form_posts_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;

    let body = format!("username=alice&password={}", TEST_PASSWORD.replace(' ', "+"));
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert!(resp.headers().get(header::SET_COOKIE).is_some());

    Ok(())
}

/// Logs in through the router and returns the session cookie.
async fn login_cookie(app: &Router, username: &str) -> String {
    let body = format!(
        "username={}&password={}",
        username,
        TEST_PASSWORD.replace(' ', "+")
    );
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let resp = app.clone().oneshot(request).await.unwrap();

    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn mark_one_notification_read_with_id_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let notification = test.contract().insert_notification(alice.id, "hello").await?;
    let app = app(&test);
    let cookie = login_cookie(&app, "alice").await;

    let request = Request::builder()
        .method("POST")
        .uri("/author/notifications/read_one")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(format!("id={}", notification.id)))
        .unwrap();

    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/author/notifications");
    let unread = NotificationService::new(&test.db)
        .count_unread(alice.id)
        .await
        .unwrap();
    assert_eq!(unread, 0);

    Ok(())
}
