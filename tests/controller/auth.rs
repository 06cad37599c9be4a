use contract_desk::server::{
    controller::auth::{index, login, logout, register, CredentialsForm},
    model::session::user::SessionUserId,
};
use entity::sea_orm_active_enums::Role;

use super::*;

fn credentials(username: &str, password: &str) -> Form<CredentialsForm> {
    Form(CredentialsForm {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Expect a redirect to the start page and the user ID stored in session
#[tokio::test]
async fn login_with_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        credentials("alice", TEST_PASSWORD),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(alice.id));

    Ok(())
}

/// Expect the same message for a wrong password and an unknown username
#[tokio::test]
async fn login_with_bad_credentials_flashes_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;

    for (username, password) in [("alice", "wrong"), ("nobody", TEST_PASSWORD)] {
        let resp = login(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            credentials(username, password),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(location(&resp), "/login");
        assert_eq!(
            flashes(&test.session).await,
            vec!["Invalid username or password".to_string()]
        );
    }

    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect registration to create an author account
#[tokio::test]
async fn register_creates_author() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = register(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        credentials("  bob  ", "hunter22"),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/login");
    let bob = test.user().find_by_username("bob").await?.unwrap();
    assert_eq!(bob.role, Role::Author);

    Ok(())
}

/// Expect a taken username to send the visitor back to the form
#[tokio::test]
async fn register_with_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;

    let resp = register(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        credentials("alice", "another"),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/register");
    assert_eq!(
        flashes(&test.session).await,
        vec!["Username is already taken".to_string()]
    );

    Ok(())
}

/// Expect blank fields to be rejected before touching the database
#[tokio::test]
async fn register_with_blank_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = register(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        credentials("   ", ""),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/register");
    assert_eq!(
        flashes(&test.session).await,
        vec!["Enter a username and password".to_string()]
    );

    Ok(())
}

/// Expect the start page to route each role to its own area
#[tokio::test]
async fn index_redirects_by_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();

    login_as(&test, root.id).await;
    let resp = index(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(location(&resp), "/admin/apps");

    test.reset_session();
    login_as(&test, alice.id).await;
    let resp = index(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(location(&resp), "/author/contracts");

    Ok(())
}

/// Expect anonymous visitors to be sent to the login page
#[tokio::test]
async fn index_without_session_redirects_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = index(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    Ok(())
}

/// Expect a session pointing at a deleted user to be cleared
#[tokio::test]
async fn index_with_stale_session_clears_it() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    login_as(&test, 42).await;

    let resp = index(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();

    assert_eq!(location(&resp), "/login");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect logout to clear the user from session
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_author("alice").build().await?;
    let alice = test.user().find_by_username("alice").await?.unwrap();
    login_as(&test, alice.id).await;

    let resp = logout(test.session.clone()).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect logout without a session to still redirect
#[tokio::test]
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = logout(test.session.clone()).await.unwrap().into_response();

    assert_eq!(location(&resp), "/login");

    Ok(())
}
