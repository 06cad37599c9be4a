use chrono::NaiveDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationDto {
    pub id: i32,
    pub message: String,
    pub created_at: NaiveDateTime,
    pub is_read: bool,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            message: notification.message,
            created_at: notification.created_at,
            is_read: notification.is_read,
        }
    }
}
