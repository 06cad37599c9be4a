use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct RoyaltyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoyaltyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the royalty of a book for a month, or replaces the amount if one exists
    ///
    /// Relies on the unique `(book_id, month)` index, so repeating the call leaves a single row
    /// holding the latest amount.
    pub async fn upsert(
        &self,
        author_id: i32,
        book_id: i32,
        month: &str,
        amount: f64,
    ) -> Result<entity::royalty::Model, DbErr> {
        entity::prelude::Royalty::insert(entity::royalty::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            book_id: ActiveValue::Set(Some(book_id)),
            month: ActiveValue::Set(month.to_string()),
            amount: ActiveValue::Set(amount),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::royalty::Column::BookId,
                entity::royalty::Column::Month,
            ])
            .update_columns([
                entity::royalty::Column::Amount,
                entity::royalty::Column::AuthorId,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Royalties of the given books, newest month first
    pub async fn list_by_books(
        &self,
        book_ids: &[i32],
    ) -> Result<Vec<entity::royalty::Model>, DbErr> {
        if book_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Royalty::find()
            .filter(entity::royalty::Column::BookId.is_in(book_ids.iter().copied()))
            .order_by_desc(entity::royalty::Column::Month)
            .all(self.db)
            .await
    }

    /// All royalties recorded for a month
    pub async fn list_by_month(&self, month: &str) -> Result<Vec<entity::royalty::Model>, DbErr> {
        entity::prelude::Royalty::find()
            .filter(entity::royalty::Column::Month.eq(month))
            .all(self.db)
            .await
    }

    pub async fn delete_by_book(&self, book_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Royalty::delete_many()
            .filter(entity::royalty::Column::BookId.eq(book_id))
            .exec(self.db)
            .await
    }
}
