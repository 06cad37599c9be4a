use contract_desk::server::{
    controller::admin::management::{
        delete_admin, end_verification, management_page, register_admin, verify_access_key,
        AccessKeyForm, DeleteAdminForm, RegisterAdminForm,
    },
    model::{app::AdminKeys, session::management::SessionAdminVerified},
};
use entity::sea_orm_active_enums::Role;

use super::*;

const ACCESS_KEY: &str = "open sesame";
const DELETE_KEY: &str = "remove please";

fn keyed_state(test: &TestContext) -> AppState {
    AppState {
        db: test.db.clone(),
        admin_keys: AdminKeys {
            access_key: Some(ACCESS_KEY.to_string()),
            delete_key: Some(DELETE_KEY.to_string()),
        },
    }
}

fn access_form(key: &str) -> Form<AccessKeyForm> {
    Form(AccessKeyForm {
        access_key: key.to_string(),
    })
}

fn register_form(username: &str) -> Form<RegisterAdminForm> {
    Form(RegisterAdminForm {
        username: username.to_string(),
        password: "s3cret".to_string(),
    })
}

/// Expect a wrong access key to leave the session unverified
#[tokio::test]
async fn wrong_access_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = verify_access_key(
        State(keyed_state(&test)),
        test.session.clone(),
        access_form("guess"),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), "/admin/management");
    assert_eq!(
        flashes(&test.session).await,
        vec!["Access key is incorrect".to_string()]
    );
    assert!(!SessionAdminVerified::get(&test.session).await.unwrap());

    Ok(())
}

/// Expect no key to match when none is configured
#[tokio::test]
async fn unconfigured_access_key_never_matches() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    verify_access_key(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        access_form(""),
    )
    .await
    .unwrap();

    assert!(!SessionAdminVerified::get(&test.session).await.unwrap());

    Ok(())
}

/// Expect registration to require a verified session
#[tokio::test]
async fn register_requires_verification() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    register_admin(
        State(keyed_state(&test)),
        test.session.clone(),
        register_form("deputy"),
    )
    .await
    .unwrap();

    assert_eq!(
        flashes(&test.session).await,
        vec!["Verify the access key first".to_string()]
    );
    assert!(test.user().find_by_username("deputy").await?.is_none());

    Ok(())
}

/// Expect a verified visitor to create an admin without logging in
#[tokio::test]
async fn verified_session_registers_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    verify_access_key(
        State(keyed_state(&test)),
        test.session.clone(),
        access_form(ACCESS_KEY),
    )
    .await
    .unwrap();
    register_admin(
        State(keyed_state(&test)),
        test.session.clone(),
        register_form("deputy"),
    )
    .await
    .unwrap();

    assert_eq!(
        flashes(&test.session).await,
        vec![
            "Access key verified".to_string(),
            "Admin account created".to_string()
        ]
    );
    let deputy = test.user().find_by_username("deputy").await?.unwrap();
    assert_eq!(deputy.role, Role::Admin);

    let resp = management_page(State(keyed_state(&test)), test.session.clone())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect deletion to need the delete key on top of the verified session
#[tokio::test]
async fn delete_admin_checks_delete_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_admin("deputy").build().await?;
    let deputy = test.user().find_by_username("deputy").await?.unwrap();
    SessionAdminVerified::insert(&test.session).await.unwrap();

    let delete_form = |key: &str| {
        Form(DeleteAdminForm {
            admin_id: deputy.id.to_string(),
            delete_key: key.to_string(),
        })
    };

    delete_admin(
        State(keyed_state(&test)),
        test.session.clone(),
        delete_form("nope"),
    )
    .await
    .unwrap();
    assert!(test.user().find_by_username("deputy").await?.is_some());

    delete_admin(
        State(keyed_state(&test)),
        test.session.clone(),
        delete_form(DELETE_KEY),
    )
    .await
    .unwrap();
    assert!(test.user().find_by_username("deputy").await?.is_none());

    assert_eq!(
        flashes(&test.session).await,
        vec![
            "Delete key is incorrect".to_string(),
            "Admin deputy deleted".to_string()
        ]
    );

    Ok(())
}

/// Expect ending verification to keep the login but drop the management flag
#[tokio::test]
async fn end_verification_drops_flag() -> Result<(), TestError> {
    let test = TestBuilder::new().with_admin("root").build().await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    login_as(&test, root.id).await;
    SessionAdminVerified::insert(&test.session).await.unwrap();

    let resp = end_verification(test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(location(&resp), "/admin/management");
    assert!(!SessionAdminVerified::get(&test.session).await.unwrap());
    assert_eq!(
        contract_desk::server::model::session::user::SessionUserId::get(&test.session)
            .await
            .unwrap(),
        Some(root.id)
    );

    Ok(())
}
