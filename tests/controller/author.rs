use contract_desk::server::{
    controller::author::{
        apply, contracts, mark_all_read, mark_read, notifications, ApplyForm, NotificationForm,
    },
    service::{application::ApplicationService, notification::NotificationService},
};
use entity::sea_orm_active_enums::{ApplicationStatus, ContractType};

use super::*;

fn apply_form(title: &str, pen_name: &str, contract_type: &str) -> Form<ApplyForm> {
    Form(ApplyForm {
        title: title.to_string(),
        pen_name: pen_name.to_string(),
        contract_type: contract_type.to_string(),
    })
}

/// Expect a submitted application to be pending and listed in the results
#[tokio::test]
async fn apply_creates_pending_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    login_as(&test, alice.id).await;

    let resp = apply(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        apply_form("Night Train", "A. Lice", "guaranteed"),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/author/results");
    let applications = ApplicationService::new(&test.db)
        .list_for_author(alice.id)
        .await
        .unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].title, "Night Train");
    assert_eq!(applications[0].contract_type, ContractType::Guaranteed);
    assert_eq!(applications[0].status, ApplicationStatus::Pending);

    Ok(())
}

/// Expect a blank title to send the author back to the form
#[tokio::test]
async fn apply_with_blank_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    login_as(&test, alice.id).await;

    let resp = apply(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        apply_form("  ", "A. Lice", "buyout"),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/author/apply");
    assert_eq!(flashes(&test.session).await, vec!["Enter a title".to_string()]);

    Ok(())
}

/// Expect an unknown contract type to be rejected
#[tokio::test]
async fn apply_with_unknown_contract_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    login_as(&test, alice.id).await;

    let resp = apply(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        apply_form("Night Train", "A. Lice", "lease"),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/author/apply");
    assert_eq!(
        flashes(&test.session).await,
        vec!["Choose a valid contract type".to_string()]
    );

    Ok(())
}

/// Expect admins to be turned away from the author area
#[tokio::test]
async fn author_pages_forbid_admins() -> Result<(), TestError> {
    let test = TestBuilder::new().with_admin("root").build().await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    login_as(&test, root.id).await;

    let resp = contracts(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    Ok(())
}

/// Expect the contract overview to render for an author with books
#[tokio::test]
async fn contracts_page_renders() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    test.contract()
        .insert_book(alice.id, "Night Train", ContractType::Guaranteed)
        .await?;
    login_as(&test, alice.id).await;

    let resp = contracts(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the notification page to render and mark all to clear the unread count
#[tokio::test]
async fn mark_all_notifications_read() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    test.contract().insert_notification(alice.id, "first").await?;
    test.contract().insert_notification(alice.id, "second").await?;
    login_as(&test, alice.id).await;

    let resp = notifications(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = mark_all_read(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(location(&resp), "/author/notifications");
    let unread = NotificationService::new(&test.db)
        .count_unread(alice.id)
        .await
        .unwrap();
    assert_eq!(unread, 0);

    Ok(())
}

/// Expect marking another author's notification to leave it unread
#[tokio::test]
async fn mark_read_ignores_foreign_notifications() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_author("alice")
        .with_author("bob")
        .build()
        .await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let bob = test.user().find_by_username("bob").await?.unwrap();
    let notification = test.contract().insert_notification(bob.id, "for bob").await?;
    login_as(&test, alice.id).await;

    let resp = mark_read(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Form(NotificationForm {
            id: notification.id.to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/author/notifications");
    let unread = NotificationService::new(&test.db)
        .count_unread(bob.id)
        .await
        .unwrap();
    assert_eq!(unread, 1);

    Ok(())
}
