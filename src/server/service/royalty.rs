//! Monthly royalties for guaranteed contracts.

use std::collections::HashMap;

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::ContractType;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::contract::{AuthorBookDto, BookDto, ContractsOverviewDto, RoyaltyDto, RoyaltyRowDto},
    server::{
        data::{
            book::BookRepository, notification::NotificationRepository,
            royalty::RoyaltyRepository, user::UserRepository,
        },
        error::{contract::ContractError, Error},
        model::db::{BookModel, RoyaltyModel},
        service::{book::books_with_authors, notification::royalty_message},
        util::{form::validate_amount, time::validate_month},
    },
};

pub struct RoyaltyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoyaltyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the royalty of a guaranteed book for a month and notifies the author.
    ///
    /// Upserts on `(book_id, month)`, so setting the same month again replaces the amount.
    /// Every call writes one notification, including repeats.
    ///
    /// # Returns
    /// - `Ok((BookModel, RoyaltyModel))` - The book and its stored royalty
    /// - `Err(ContractError::InvalidAmount)` - Amount not a finite, non-negative number
    /// - `Err(ContractError::InvalidMonth)` - Month not a `YYYY-MM` key
    /// - `Err(ContractError::BookNotFound)` - No such book
    /// - `Err(ContractError::NotGuaranteed)` - Book is a buyout contract
    pub async fn set_royalty(
        &self,
        book_id: i32,
        month: &str,
        amount: f64,
    ) -> Result<(BookModel, RoyaltyModel), Error> {
        validate_amount(amount)?;
        validate_month(month)?;

        let txn = self.db.begin().await?;

        let book = BookRepository::new(&txn)
            .get(book_id)
            .await?
            .ok_or(ContractError::BookNotFound(book_id))?;

        if book.contract_type != ContractType::Guaranteed {
            return Err(ContractError::NotGuaranteed(book_id).into());
        }

        let royalty = RoyaltyRepository::new(&txn)
            .upsert(book.author_id, book.id, month, amount)
            .await?;

        NotificationRepository::new(&txn)
            .create(book.author_id, &royalty_message(&book.title, month, amount))
            .await?;

        txn.commit().await?;

        tracing::info!(
            book_id = %book.id,
            month = %month,
            amount = %amount,
            "Royalty set"
        );

        Ok((book, royalty))
    }

    /// Every book with the royalty recorded for `month`, for the admin royalty page.
    pub async fn admin_overview(&self, month: &str) -> Result<Vec<RoyaltyRowDto>, Error> {
        validate_month(month)?;

        let books = books_with_authors(self.db).await?;
        let amounts: HashMap<i32, f64> = RoyaltyRepository::new(self.db)
            .list_by_month(month)
            .await?
            .into_iter()
            .filter_map(|royalty| royalty.book_id.map(|book_id| (book_id, royalty.amount)))
            .collect();

        Ok(books
            .into_iter()
            .map(|book| RoyaltyRowDto {
                amount: amounts.get(&book.id).copied(),
                book,
            })
            .collect())
    }

    /// An author's books, newest first, with the royalty of `month` and the other months.
    pub async fn contracts_overview(
        &self,
        author_id: i32,
        month: &str,
    ) -> Result<ContractsOverviewDto, Error> {
        validate_month(month)?;

        let author_username = UserRepository::new(self.db)
            .get(author_id)
            .await?
            .map(|user| user.username)
            .unwrap_or_default();

        let books = BookRepository::new(self.db).list_by_author(author_id).await?;
        let book_ids: Vec<i32> = books.iter().map(|book| book.id).collect();

        let mut royalties_by_book: HashMap<i32, Vec<RoyaltyModel>> = HashMap::new();
        for royalty in RoyaltyRepository::new(self.db)
            .list_by_books(&book_ids)
            .await?
        {
            if let Some(book_id) = royalty.book_id {
                royalties_by_book.entry(book_id).or_default().push(royalty);
            }
        }

        let books = books
            .into_iter()
            .map(|book| {
                let royalties = royalties_by_book.remove(&book.id).unwrap_or_default();
                let current_royalty = royalties
                    .iter()
                    .find(|royalty| royalty.month == month)
                    .map(|royalty| royalty.amount);
                let history = royalties
                    .into_iter()
                    .filter(|royalty| royalty.month != month)
                    .map(|royalty| RoyaltyDto {
                        month: royalty.month,
                        amount: royalty.amount,
                    })
                    .collect();

                AuthorBookDto {
                    book: BookDto::from_model(book, author_username.clone()),
                    current_royalty,
                    history,
                }
            })
            .collect();

        Ok(ContractsOverviewDto {
            month: month.to_string(),
            books,
        })
    }
}
