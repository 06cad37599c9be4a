use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, UpdateResult,
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an unread notification
    pub async fn create(
        &self,
        recipient_id: i32,
        message: &str,
    ) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::notification::ActiveModel {
            recipient_id: ActiveValue::Set(recipient_id),
            message: ActiveValue::Set(message.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            is_read: ActiveValue::Set(false),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    /// Notifications of one recipient, newest first
    pub async fn list_by_recipient(
        &self,
        recipient_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_unread(&self, recipient_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    pub async fn mark_all_read(&self, recipient_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Notification::update_many()
            .set(entity::notification::ActiveModel {
                is_read: ActiveValue::Set(true),
                ..Default::default()
            })
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .exec(self.db)
            .await
    }

    /// Marks one notification as read
    ///
    /// Filtered by recipient as well, so a notification addressed to another user is never
    /// touched and results in 0 rows affected.
    pub async fn mark_read(
        &self,
        recipient_id: i32,
        notification_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Notification::update_many()
            .set(entity::notification::ActiveModel {
                is_read: ActiveValue::Set(true),
                ..Default::default()
            })
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .exec(self.db)
            .await
    }
}
