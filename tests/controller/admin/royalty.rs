use axum::extract::Query;
use contract_desk::server::controller::admin::royalty::{
    royalties_page, set_royalty, MonthQuery, RoyaltyForm,
};
use entity::sea_orm_active_enums::ContractType;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::*;

fn royalty_form(book_id: &str, amount: &str, month: &str) -> Form<RoyaltyForm> {
    Form(RoyaltyForm {
        book_id: book_id.to_string(),
        amount: amount.to_string(),
        month: month.to_string(),
    })
}

/// Expect setting the same month twice to keep one row with the latest amount
#[tokio::test]
async fn set_royalty_upserts_per_month() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let book = test
        .contract()
        .insert_book(alice.id, "Night Train", ContractType::Guaranteed)
        .await?;
    login_as(&test, root.id).await;

    for amount in ["120", "150.5"] {
        let resp = set_royalty(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            royalty_form(&book.id.to_string(), amount, "2024-05"),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(location(&resp), "/admin/royalties?month=2024-05");
    }

    let royalties = entity::prelude::Royalty::find()
        .filter(entity::royalty::Column::BookId.eq(book.id))
        .all(&test.db)
        .await?;
    assert_eq!(royalties.len(), 1);
    assert_eq!(royalties[0].amount, 150.5);
    assert_eq!(royalties[0].month, "2024-05");
    assert_eq!(test.contract().notification_count(alice.id).await?, 2);

    Ok(())
}

/// Expect buyout books to refuse monthly royalties
#[tokio::test]
async fn set_royalty_on_buyout_book() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_author("alice")
        .build()
        .await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    let alice = test.user().find_by_username("alice").await?.unwrap();
    let book = test
        .contract()
        .insert_book(alice.id, "Sold Outright", ContractType::Buyout)
        .await?;
    login_as(&test, root.id).await;

    set_royalty(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        royalty_form(&book.id.to_string(), "100", "2024-05"),
    )
    .await
    .unwrap();

    assert_eq!(
        flashes(&test.session).await,
        vec!["Only guaranteed contracts take monthly royalties".to_string()]
    );
    assert_eq!(test.contract().notification_count(alice.id).await?, 0);

    Ok(())
}

/// Expect field validation to run in order: book, amount, month
#[tokio::test]
async fn set_royalty_validation_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_admin("root").build().await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    login_as(&test, root.id).await;

    for form in [
        royalty_form("abc", "-1", "bad"),
        royalty_form("1", "-1", "bad"),
        royalty_form("1", "10", "2024-13"),
    ] {
        set_royalty(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            form,
        )
        .await
        .unwrap();
    }

    let messages = flashes(&test.session).await;
    assert_eq!(messages[0], "Select a valid book");
    assert_eq!(messages[1], "Enter a valid amount");
    assert!(messages[2].contains("2024-13"));

    Ok(())
}

/// Expect an invalid month in the query to fall back to the current month
#[tokio::test]
async fn royalties_page_with_invalid_month() -> Result<(), TestError> {
    let test = TestBuilder::new().with_admin("root").build().await?;
    let root = test.user().find_by_username("root").await?.unwrap();
    login_as(&test, root.id).await;

    let resp = royalties_page(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Query(MonthQuery {
            month: Some("not-a-month".to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
