use contract_desk::server::controller::admin::user::{delete_user, users_page, DeleteUserForm};

use super::*;

fn delete_form(user_id: i32) -> Form<DeleteUserForm> {
    Form(DeleteUserForm {
        user_id: user_id.to_string(),
    })
}

/// Expect an admin to be unable to delete their own account
#[tokio::test]
async fn cannot_delete_self() -> Result<(), TestError> {
    let test = TestBuilder::new().with_admin("root").build().await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    login_as(&test, root.id).await;

    let resp = delete_user(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        delete_form(root.id),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/admin/users");
    assert_eq!(
        flashes(&test.session).await,
        vec!["You cannot delete your own account".to_string()]
    );
    assert!(test.user().find_by_username("root").await?.is_some());

    Ok(())
}

/// Expect another admin to be deleted
#[tokio::test]
async fn deletes_other_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_admin("deputy")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let deputy = test.user().find_by_username("deputy").await?.unwrap();
    login_as(&test, root.id).await;

    delete_user(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        delete_form(deputy.id),
    )
    .await
    .unwrap();

    assert_eq!(flashes(&test.session).await, vec!["User deleted".to_string()]);
    assert!(test.user().find_by_username("deputy").await?.is_none());

    Ok(())
}

/// Expect author accounts to be kept
#[tokio::test]
async fn authors_are_not_deleted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();
    login_as(&test, root.id).await;

    delete_user(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        delete_form(alice.id),
    )
    .await
    .unwrap();

    assert_eq!(
        flashes(&test.session).await,
        vec!["Only admin accounts can be deleted".to_string()]
    );
    assert!(test.user().find_by_username("alice").await?.is_some());

    Ok(())
}

#[tokio::test]
async fn users_page_renders() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    login_as(&test, root.id).await;

    let resp = users_page(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
