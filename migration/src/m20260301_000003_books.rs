use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_users::Users;

static IDX_BOOKS_AUTHOR_ID: &str = "idx-books-author_id";
static FK_BOOKS_AUTHOR_ID: &str = "fk-books-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(pk_auto(Books::Id))
                    .col(string(Books::Title))
                    .col(integer(Books::AuthorId))
                    .col(string(Books::PenName))
                    .col(string(Books::ContractType))
                    .col(double_null(Books::BuyoutAmount))
                    .col(timestamp(Books::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOOKS_AUTHOR_ID)
                            .from(Books::Table, Books::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKS_AUTHOR_ID)
                    .table(Books::Table)
                    .col(Books::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKS_AUTHOR_ID)
                    .table(Books::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Books {
    Table,
    Id,
    Title,
    AuthorId,
    PenName,
    ContractType,
    BuyoutAmount,
    CreatedAt,
}
