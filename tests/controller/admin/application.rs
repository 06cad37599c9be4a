use contract_desk::server::{
    controller::admin::application::{process_application, ApplicationActionForm},
    service::notification::NO_REASON_GIVEN,
};
use entity::sea_orm_active_enums::{ApplicationStatus, ContractType};

use super::*;

fn action(
    action: &str,
    app_id: i32,
    buyout_amount: Option<&str>,
    reason: &str,
) -> Form<ApplicationActionForm> {
    Form(ApplicationActionForm {
        action: action.to_string(),
        app_id: app_id.to_string(),
        buyout_amount: buyout_amount.map(str::to_string),
        reason: reason.to_string(),
    })
}

/// Expect an approved buyout to create a book with its amount and one notification
#[tokio::test]
async fn approve_buyout_creates_book() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let application = test
        .contract()
        .insert_application(alice.id, ContractType::Buyout)
        .await?;
    login_as(&test, root.id).await;

    let resp = process_application(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        action("approve_app", application.id, Some("2500"), ""),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/admin/apps");
    assert_eq!(
        flashes(&test.session).await,
        vec!["Buyout approved and author notified".to_string()]
    );

    let stored = test.contract().get_application(application.id).await?.unwrap();
    assert_eq!(stored.status, ApplicationStatus::Approved);
    assert_eq!(stored.reviewer_id, Some(root.id));
    assert!(stored.processed_at.is_some());
    assert_eq!(test.contract().book_count(alice.id).await?, 1);
    assert_eq!(test.contract().notification_count(alice.id).await?, 1);

    Ok(())
}

/// Expect a buyout without an amount to stay pending
#[tokio::test]
async fn approve_buyout_without_amount() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let application = test
        .contract()
        .insert_application(alice.id, ContractType::Buyout)
        .await?;
    login_as(&test, root.id).await;

    process_application(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        action("approve_app", application.id, Some("   "), ""),
    )
    .await
    .unwrap();

    assert_eq!(
        flashes(&test.session).await,
        vec!["A buyout amount is required".to_string()]
    );
    let stored = test.contract().get_application(application.id).await?.unwrap();
    assert_eq!(stored.status, ApplicationStatus::Pending);
    assert_eq!(test.contract().book_count(alice.id).await?, 0);
    assert_eq!(test.contract().notification_count(alice.id).await?, 0);

    Ok(())
}

/// Expect a guaranteed approval to ignore any submitted amount
#[tokio::test]
async fn approve_guaranteed_ignores_amount() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let application = test
        .contract()
        .insert_application(alice.id, ContractType::Guaranteed)
        .await?;
    login_as(&test, root.id).await;

    process_application(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        action("approve_app", application.id, Some("999"), ""),
    )
    .await
    .unwrap();

    assert_eq!(
        flashes(&test.session).await,
        vec!["Guaranteed contract approved and author notified".to_string()]
    );
    assert_eq!(test.contract().book_count(alice.id).await?, 1);

    Ok(())
}

/// Expect a second decision on the same application to be refused
#[tokio::test]
async fn processed_application_cannot_change() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let application = test
        .contract()
        .insert_application(alice.id, ContractType::Guaranteed)
        .await?;
    login_as(&test, root.id).await;

    for form in [
        action("approve_app", application.id, None, ""),
        action("reject_app", application.id, None, "changed my mind"),
    ] {
        process_application(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            form,
        )
        .await
        .unwrap();
    }

    let messages = flashes(&test.session).await;
    assert_eq!(messages[1], "Application has already been processed");
    let stored = test.contract().get_application(application.id).await?.unwrap();
    assert_eq!(stored.status, ApplicationStatus::Approved);
    assert_eq!(test.contract().notification_count(alice.id).await?, 1);

    Ok(())
}

/// Expect a blank rejection reason to be stored as the default reason
#[tokio::test]
async fn reject_with_blank_reason() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let application = test
        .contract()
        .insert_application(alice.id, ContractType::Buyout)
        .await?;
    login_as(&test, root.id).await;

    process_application(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        action("reject_app", application.id, None, "  "),
    )
    .await
    .unwrap();

    assert_eq!(
        flashes(&test.session).await,
        vec!["Application rejected and author notified".to_string()]
    );
    let stored = test.contract().get_application(application.id).await?.unwrap();
    assert_eq!(stored.status, ApplicationStatus::Rejected);
    assert_eq!(stored.reject_reason.as_deref(), Some(NO_REASON_GIVEN));
    assert_eq!(test.contract().book_count(alice.id).await?, 0);
    assert_eq!(test.contract().notification_count(alice.id).await?, 1);

    Ok(())
}

/// Expect unknown applications and actions to be flashed as errors
#[tokio::test]
async fn unknown_application_or_action() -> Result<(), TestError> {
    let test = TestBuilder::new().with_admin("root").build().await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    login_as(&test, root.id).await;

    process_application(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        action("approve_app", 404, Some("10"), ""),
    )
    .await
    .unwrap();
    process_application(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        action("archive_app", 1, None, ""),
    )
    .await
    .unwrap();

    assert_eq!(
        flashes(&test.session).await,
        vec![
            "Application not found".to_string(),
            "Select a valid action".to_string()
        ]
    );

    Ok(())
}

/// Expect authors to be turned away from admin actions
#[tokio::test]
async fn authors_cannot_process_applications() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let application = test
        .contract()
        .insert_application(alice.id, ContractType::Guaranteed)
        .await?;
    login_as(&test, alice.id).await;

    let resp = process_application(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        action("approve_app", application.id, None, ""),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    let stored = test.contract().get_application(application.id).await?.unwrap();
    assert_eq!(stored.status, ApplicationStatus::Pending);

    Ok(())
}
