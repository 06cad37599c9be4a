use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_users::Users;

static IDX_NOTIFICATIONS_RECIPIENT_ID: &str = "idx-notifications-recipient_id";
static FK_NOTIFICATIONS_RECIPIENT_ID: &str = "fk-notifications-recipient_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(pk_auto(Notifications::Id))
                    .col(integer(Notifications::RecipientId))
                    .col(text(Notifications::Message))
                    .col(timestamp(Notifications::CreatedAt))
                    .col(boolean(Notifications::IsRead))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NOTIFICATIONS_RECIPIENT_ID)
                            .from(Notifications::Table, Notifications::RecipientId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATIONS_RECIPIENT_ID)
                    .table(Notifications::Table)
                    .col(Notifications::RecipientId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATIONS_RECIPIENT_ID)
                    .table(Notifications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    RecipientId,
    Message,
    CreatedAt,
    IsRead,
}
