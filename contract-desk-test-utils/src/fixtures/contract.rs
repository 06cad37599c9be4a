use chrono::Utc;
use entity::sea_orm_active_enums::{ApplicationStatus, ContractType};
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{ApplicationModel, BookModel, NotificationModel, RoyaltyModel},
    TestContext,
};

impl TestContext {
    pub fn contract(&self) -> ContractFixtures<'_> {
        ContractFixtures { test: self }
    }
}

pub struct ContractFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ContractFixtures<'a> {
    /// Insert a pending application titled "Test Book" under the pen name "Test Pen".
    pub async fn insert_application(
        &self,
        author_id: i32,
        contract_type: ContractType,
    ) -> Result<ApplicationModel, TestError> {
        self.insert_application_with_status(author_id, contract_type, ApplicationStatus::Pending)
            .await
    }

    pub async fn insert_application_with_status(
        &self,
        author_id: i32,
        contract_type: ContractType,
        status: ApplicationStatus,
    ) -> Result<ApplicationModel, TestError> {
        let processed_at = match status {
            ApplicationStatus::Pending => None,
            _ => Some(Utc::now().naive_utc()),
        };

        Ok(
            entity::prelude::Application::insert(entity::application::ActiveModel {
                author_id: ActiveValue::Set(author_id),
                title: ActiveValue::Set("Test Book".to_string()),
                pen_name: ActiveValue::Set("Test Pen".to_string()),
                contract_type: ActiveValue::Set(contract_type),
                status: ActiveValue::Set(status),
                reject_reason: ActiveValue::Set(None),
                reviewer_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                processed_at: ActiveValue::Set(processed_at),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a book directly, as if its application had been approved.
    pub async fn insert_book(
        &self,
        author_id: i32,
        title: &str,
        contract_type: ContractType,
    ) -> Result<BookModel, TestError> {
        let buyout_amount = match contract_type {
            ContractType::Buyout => Some(1000.0),
            ContractType::Guaranteed => None,
        };

        Ok(
            entity::prelude::Book::insert(entity::book::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                author_id: ActiveValue::Set(author_id),
                pen_name: ActiveValue::Set("Test Pen".to_string()),
                contract_type: ActiveValue::Set(contract_type),
                buyout_amount: ActiveValue::Set(buyout_amount),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_royalty(
        &self,
        author_id: i32,
        book_id: i32,
        month: &str,
        amount: f64,
    ) -> Result<RoyaltyModel, TestError> {
        Ok(
            entity::prelude::Royalty::insert(entity::royalty::ActiveModel {
                author_id: ActiveValue::Set(author_id),
                book_id: ActiveValue::Set(Some(book_id)),
                month: ActiveValue::Set(month.to_string()),
                amount: ActiveValue::Set(amount),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_notification(
        &self,
        recipient_id: i32,
        message: &str,
    ) -> Result<NotificationModel, TestError> {
        Ok(
            entity::prelude::Notification::insert(entity::notification::ActiveModel {
                recipient_id: ActiveValue::Set(recipient_id),
                message: ActiveValue::Set(message.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                is_read: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Number of notifications addressed to `recipient_id`.
    pub async fn notification_count(&self, recipient_id: i32) -> Result<u64, TestError> {
        Ok(entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .count(&self.test.db)
            .await?)
    }

    /// Number of books owned by `author_id`.
    pub async fn book_count(&self, author_id: i32) -> Result<u64, TestError> {
        Ok(entity::prelude::Book::find()
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .count(&self.test.db)
            .await?)
    }

    pub async fn get_application(&self, id: i32) -> Result<Option<ApplicationModel>, TestError> {
        Ok(entity::prelude::Application::find_by_id(id)
            .one(&self.test.db)
            .await?)
    }
}
