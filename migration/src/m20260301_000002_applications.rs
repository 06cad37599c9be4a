use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_users::Users;

static IDX_APPLICATIONS_AUTHOR_ID: &str = "idx-applications-author_id";
static FK_APPLICATIONS_AUTHOR_ID: &str = "fk-applications-author_id";
static FK_APPLICATIONS_REVIEWER_ID: &str = "fk-applications-reviewer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline, SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(pk_auto(Applications::Id))
                    .col(integer(Applications::AuthorId))
                    .col(string(Applications::Title))
                    .col(string(Applications::PenName))
                    .col(string(Applications::ContractType))
                    .col(string(Applications::Status))
                    .col(text_null(Applications::RejectReason))
                    .col(integer_null(Applications::ReviewerId))
                    .col(timestamp(Applications::CreatedAt))
                    .col(timestamp_null(Applications::ProcessedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APPLICATIONS_AUTHOR_ID)
                            .from(Applications::Table, Applications::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APPLICATIONS_REVIEWER_ID)
                            .from(Applications::Table, Applications::ReviewerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATIONS_AUTHOR_ID)
                    .table(Applications::Table)
                    .col(Applications::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATIONS_AUTHOR_ID)
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    AuthorId,
    Title,
    PenName,
    ContractType,
    Status,
    RejectReason,
    ReviewerId,
    CreatedAt,
    ProcessedAt,
}
