//! Author notifications.
//!
//! Notifications are written by admin actions inside the same transaction as the change they
//! describe; this service only reads them and tracks read state.

use entity::sea_orm_active_enums::ContractType;
use sea_orm::DatabaseConnection;

use crate::{
    model::notification::NotificationDto,
    server::{data::notification::NotificationRepository, error::Error, util::form::format_amount},
};

/// Replacement text when an admin rejects without giving a reason.
pub const NO_REASON_GIVEN: &str = "No reason given";

pub fn approved_message(title: &str, contract_type: ContractType, buyout_amount: Option<f64>) -> String {
    match (contract_type, buyout_amount) {
        (ContractType::Buyout, Some(amount)) => format!(
            "Your contract application was approved (buyout): \"{}\", buyout fee: ¥{}",
            title,
            format_amount(amount)
        ),
        _ => format!(
            "Your contract application was approved (guaranteed): \"{}\", royalties will be set monthly",
            title
        ),
    }
}

pub fn rejected_message(title: &str, reason: &str) -> String {
    format!(
        "Your contract application was rejected: \"{}\", reason: {}",
        title, reason
    )
}

pub fn royalty_message(title: &str, month: &str, amount: f64) -> String {
    format!(
        "Royalty for \"{}\" {} set to ¥{}",
        title,
        month,
        format_amount(amount)
    )
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notifications of a user, newest first.
    pub async fn list_for_recipient(
        &self,
        recipient_id: i32,
    ) -> Result<Vec<NotificationDto>, Error> {
        Ok(NotificationRepository::new(self.db)
            .list_by_recipient(recipient_id)
            .await?
            .into_iter()
            .map(NotificationDto::from)
            .collect())
    }

    pub async fn count_unread(&self, recipient_id: i32) -> Result<u64, Error> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(recipient_id)
            .await?)
    }

    /// Marks every notification of the recipient as read, returning how many were updated.
    pub async fn mark_all_read(&self, recipient_id: i32) -> Result<u64, Error> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(recipient_id)
            .await?
            .rows_affected)
    }

    /// Marks one of the recipient's notifications as read.
    ///
    /// Returns `false` when the notification does not exist or belongs to someone else.
    pub async fn mark_read(&self, recipient_id: i32, notification_id: i32) -> Result<bool, Error> {
        let result = NotificationRepository::new(self.db)
            .mark_read(recipient_id, notification_id)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
