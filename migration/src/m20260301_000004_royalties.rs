use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000001_users::Users, m20260301_000003_books::Books};

static IDX_ROYALTIES_BOOK_MONTH: &str = "idx-royalties-book_id-month";
static IDX_ROYALTIES_AUTHOR_ID: &str = "idx-royalties-author_id";
static FK_ROYALTIES_AUTHOR_ID: &str = "fk-royalties-author_id";
static FK_ROYALTIES_BOOK_ID: &str = "fk-royalties-book_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Royalties::Table)
                    .if_not_exists()
                    .col(pk_auto(Royalties::Id))
                    .col(integer(Royalties::AuthorId))
                    .col(integer_null(Royalties::BookId))
                    .col(string_len(Royalties::Month, 7))
                    .col(double(Royalties::Amount))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROYALTIES_AUTHOR_ID)
                            .from(Royalties::Table, Royalties::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROYALTIES_BOOK_ID)
                            .from(Royalties::Table, Royalties::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULL book IDs never collide, so rows without a book are left unconstrained
        manager
            .create_index(
                Index::create()
                    .name(IDX_ROYALTIES_BOOK_MONTH)
                    .table(Royalties::Table)
                    .col(Royalties::BookId)
                    .col(Royalties::Month)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROYALTIES_AUTHOR_ID)
                    .table(Royalties::Table)
                    .col(Royalties::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROYALTIES_AUTHOR_ID)
                    .table(Royalties::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROYALTIES_BOOK_MONTH)
                    .table(Royalties::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Royalties::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Royalties {
    Table,
    Id,
    AuthorId,
    BookId,
    Month,
    Amount,
}
