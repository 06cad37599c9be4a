//! Contract applications and their approval state machine.
//!
//! An application starts `pending` and is changed exactly once, to `approved` or `rejected`.
//! Approval creates the book and notifies the author; rejection only notifies. Both run in a
//! single transaction and the status update is guarded by `status = 'pending'`, so a second
//! attempt on the same application fails even when two admins act at the same time.

use std::collections::HashMap;

use chrono::Utc;
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::{ApplicationStatus, ContractType};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::contract::ApplicationDto,
    server::{
        data::{
            application::ApplicationRepository, book::BookRepository,
            notification::NotificationRepository, user::UserRepository,
        },
        error::{contract::ContractError, Error},
        model::db::{ApplicationModel, BookModel, UserModel},
        service::notification::{approved_message, rejected_message, NO_REASON_GIVEN},
        util::form::{parse_amount, required},
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a pending application for an author.
    ///
    /// # Returns
    /// - `Ok(ApplicationModel)` - The pending application
    /// - `Err(ContractError::MissingField)` - Blank title or pen name
    /// - `Err(ContractError::InvalidContractType)` - Neither `guaranteed` nor `buyout`
    pub async fn submit(
        &self,
        author_id: i32,
        title: &str,
        pen_name: &str,
        contract_type: &str,
    ) -> Result<ApplicationModel, Error> {
        let title = required(title, "title")?;
        let pen_name = required(pen_name, "pen name")?;
        let contract_type =
            ContractType::parse(contract_type.trim()).ok_or(ContractError::InvalidContractType)?;

        let application = ApplicationRepository::new(self.db)
            .create(author_id, &title, &pen_name, contract_type)
            .await?;

        tracing::info!(
            application_id = %application.id,
            author_id = %author_id,
            "Application submitted"
        );

        Ok(application)
    }

    /// Applications of one author, newest first.
    pub async fn list_for_author(&self, author_id: i32) -> Result<Vec<ApplicationDto>, Error> {
        let applications = ApplicationRepository::new(self.db)
            .list_by_author(author_id)
            .await?;

        let author_username = UserRepository::new(self.db)
            .get(author_id)
            .await?
            .map(|user| user.username)
            .unwrap_or_default();

        self.with_reviewers(
            applications
                .into_iter()
                .map(|application| (application, author_username.clone()))
                .collect(),
        )
        .await
    }

    /// Every application with author and reviewer usernames, newest first.
    pub async fn list_all(&self) -> Result<Vec<ApplicationDto>, Error> {
        let rows = ApplicationRepository::new(self.db)
            .list_with_author()
            .await?;

        let applications = rows
            .into_iter()
            .map(|(application, author)| {
                let author = author.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find author ID {} of application ID {}",
                        application.author_id, application.id
                    ))
                })?;

                Ok((application, author.username))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        self.with_reviewers(applications).await
    }

    async fn with_reviewers(
        &self,
        applications: Vec<(ApplicationModel, String)>,
    ) -> Result<Vec<ApplicationDto>, Error> {
        let mut reviewer_ids: Vec<i32> = applications
            .iter()
            .filter_map(|(application, _)| application.reviewer_id)
            .collect();
        reviewer_ids.sort_unstable();
        reviewer_ids.dedup();

        let reviewers: HashMap<i32, UserModel> = UserRepository::new(self.db)
            .get_many(&reviewer_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Ok(applications
            .into_iter()
            .map(|(application, author_username)| ApplicationDto {
                reviewer_username: application
                    .reviewer_id
                    .and_then(|id| reviewers.get(&id))
                    .map(|user| user.username.clone()),
                id: application.id,
                author_id: application.author_id,
                author_username,
                title: application.title,
                pen_name: application.pen_name,
                contract_type: application.contract_type,
                status: application.status,
                reject_reason: application.reject_reason,
                created_at: application.created_at,
                processed_at: application.processed_at,
            })
            .collect())
    }

    /// Approves a pending application, creating its book and notifying the author.
    ///
    /// # Arguments
    /// - `reviewer_id` - Admin approving the application
    /// - `application_id` - Application to approve
    /// - `buyout_amount` - Raw form value, required for buyout contracts and ignored otherwise
    ///
    /// # Returns
    /// - `Ok(BookModel)` - The created book
    /// - `Err(ContractError::ApplicationNotFound)` - No such application
    /// - `Err(ContractError::ApplicationAlreadyProcessed)` - Not pending anymore
    /// - `Err(ContractError::BuyoutAmountRequired)` - Buyout without an amount
    /// - `Err(ContractError::InvalidAmount)` - Amount not a finite, non-negative number
    pub async fn approve(
        &self,
        reviewer_id: i32,
        application_id: i32,
        buyout_amount: Option<&str>,
    ) -> Result<BookModel, Error> {
        let txn = self.db.begin().await?;

        let application_repo = ApplicationRepository::new(&txn);
        let application = application_repo
            .get(application_id)
            .await?
            .ok_or(ContractError::ApplicationNotFound(application_id))?;

        if application.status != ApplicationStatus::Pending {
            return Err(ContractError::ApplicationAlreadyProcessed(application_id).into());
        }

        let buyout_amount = match application.contract_type {
            ContractType::Buyout => {
                let raw = buyout_amount
                    .map(str::trim)
                    .filter(|raw| !raw.is_empty())
                    .ok_or(ContractError::BuyoutAmountRequired)?;

                Some(parse_amount(raw)?)
            }
            ContractType::Guaranteed => None,
        };

        let result = application_repo
            .mark_approved(application_id, reviewer_id, Utc::now().naive_utc())
            .await?;
        if result.rows_affected == 0 {
            return Err(ContractError::ApplicationAlreadyProcessed(application_id).into());
        }

        let book = BookRepository::new(&txn)
            .create(&application, buyout_amount)
            .await?;

        let message = approved_message(&application.title, application.contract_type, buyout_amount);
        NotificationRepository::new(&txn)
            .create(application.author_id, &message)
            .await?;

        txn.commit().await?;

        tracing::info!(
            application_id = %application_id,
            book_id = %book.id,
            reviewer_id = %reviewer_id,
            contract_type = %application.contract_type.as_str(),
            "Application approved"
        );

        Ok(book)
    }

    /// Rejects a pending application and notifies the author.
    ///
    /// A blank reason is stored as [`NO_REASON_GIVEN`].
    pub async fn reject(
        &self,
        reviewer_id: i32,
        application_id: i32,
        reason: &str,
    ) -> Result<ApplicationModel, Error> {
        let reason = match reason.trim() {
            "" => NO_REASON_GIVEN,
            reason => reason,
        };

        let txn = self.db.begin().await?;

        let application_repo = ApplicationRepository::new(&txn);
        let application = application_repo
            .get(application_id)
            .await?
            .ok_or(ContractError::ApplicationNotFound(application_id))?;

        if application.status != ApplicationStatus::Pending {
            return Err(ContractError::ApplicationAlreadyProcessed(application_id).into());
        }

        let result = application_repo
            .mark_rejected(application_id, reason, reviewer_id, Utc::now().naive_utc())
            .await?;
        if result.rows_affected == 0 {
            return Err(ContractError::ApplicationAlreadyProcessed(application_id).into());
        }

        NotificationRepository::new(&txn)
            .create(
                application.author_id,
                &rejected_message(&application.title, reason),
            )
            .await?;

        let rejected = application_repo
            .get(application_id)
            .await?
            .ok_or(ContractError::ApplicationNotFound(application_id))?;

        txn.commit().await?;

        tracing::info!(
            application_id = %application_id,
            reviewer_id = %reviewer_id,
            "Application rejected"
        );

        Ok(rejected)
    }
}
