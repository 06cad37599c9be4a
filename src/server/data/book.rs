use chrono::Utc;
use entity::sea_orm_active_enums::ContractType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a book for an approved application
    ///
    /// `buyout_amount` is only stored for buyout contracts.
    pub async fn create(
        &self,
        application: &entity::application::Model,
        buyout_amount: Option<f64>,
    ) -> Result<entity::book::Model, DbErr> {
        let buyout_amount = match application.contract_type {
            ContractType::Buyout => buyout_amount,
            ContractType::Guaranteed => None,
        };

        let book = entity::book::ActiveModel {
            title: ActiveValue::Set(application.title.clone()),
            author_id: ActiveValue::Set(application.author_id),
            pen_name: ActiveValue::Set(application.pen_name.clone()),
            contract_type: ActiveValue::Set(application.contract_type),
            buyout_amount: ActiveValue::Set(buyout_amount),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        book.insert(self.db).await
    }

    pub async fn get(&self, book_id: i32) -> Result<Option<entity::book::Model>, DbErr> {
        entity::prelude::Book::find_by_id(book_id).one(self.db).await
    }

    /// Books of one author, newest first
    pub async fn list_by_author(&self, author_id: i32) -> Result<Vec<entity::book::Model>, DbErr> {
        entity::prelude::Book::find()
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::book::Column::Id)
            .all(self.db)
            .await
    }

    /// All books with their author, ordered by author username then newest book first
    pub async fn list_with_author(
        &self,
    ) -> Result<Vec<(entity::book::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Book::find()
            .find_also_related(entity::user::Entity)
            .order_by_asc(entity::user::Column::Username)
            .order_by_desc(entity::book::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a book
    ///
    /// Returns OK regardless of the book existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, book_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Book::delete_by_id(book_id)
            .exec(self.db)
            .await
    }
}
