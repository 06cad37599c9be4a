use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::contract::BookDto,
    server::{
        data::{book::BookRepository, royalty::RoyaltyRepository},
        error::{contract::ContractError, Error},
        model::db::BookModel,
    },
};

/// All books as DTOs, ordered by author username then newest book first.
pub(crate) async fn books_with_authors<C: ConnectionTrait>(db: &C) -> Result<Vec<BookDto>, Error> {
    BookRepository::new(db)
        .list_with_author()
        .await?
        .into_iter()
        .map(|(book, author)| {
            let author = author.ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find author ID {} of book ID {}",
                    book.author_id, book.id
                ))
            })?;

            Ok(BookDto::from_model(book, author.username))
        })
        .collect()
}

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<BookDto>, Error> {
        books_with_authors(self.db).await
    }

    /// Deletes a book together with its royalty records in one transaction.
    ///
    /// # Returns
    /// - `Ok(BookModel)` - The deleted book
    /// - `Err(ContractError::BookNotFound)` - No such book
    pub async fn delete_book(&self, book_id: i32) -> Result<BookModel, Error> {
        let txn = self.db.begin().await?;

        let book_repo = BookRepository::new(&txn);
        let book = book_repo
            .get(book_id)
            .await?
            .ok_or(ContractError::BookNotFound(book_id))?;

        let royalties = RoyaltyRepository::new(&txn).delete_by_book(book_id).await?;
        book_repo.delete(book_id).await?;

        txn.commit().await?;

        tracing::info!(
            book_id = %book_id,
            royalties = %royalties.rows_affected,
            "Book deleted"
        );

        Ok(book)
    }
}
