//! User account service.
//!
//! Account creation shared by registration, admin management, bootstrap and the seed CLI, plus
//! listing and deletion of admin accounts.

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{admin::AdminError, auth::AuthError, Error},
        model::db::UserModel,
        util::password::hash_password,
    },
};

/// Username of the admin created at startup when no admin exists.
pub const BOOTSTRAP_ADMIN_USERNAME: &str = "admin";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        Ok(UserRepository::new(self.db)
            .get(user_id)
            .await?
            .map(UserDto::from))
    }

    /// Creates an account with an Argon2id password hash.
    ///
    /// The username is trimmed; it must not be blank and must not exist yet. The password must
    /// not be empty.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<UserModel, Error> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken.into());
        }

        let password_hash = hash_password(password)?;
        let user = user_repo.create(username, &password_hash, role).await?;

        tracing::info!(
            user_id = %user.id,
            role = %role.as_str(),
            "Created account {}",
            user.username
        );

        Ok(user)
    }

    /// All accounts, newest first.
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        Ok(UserRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(UserDto::from)
            .collect())
    }

    /// All admin accounts, oldest first.
    pub async fn list_admins(&self) -> Result<Vec<UserDto>, Error> {
        Ok(UserRepository::new(self.db)
            .list_admins()
            .await?
            .into_iter()
            .map(UserDto::from)
            .collect())
    }

    /// Deletes an admin account.
    ///
    /// # Arguments
    /// - `actor_id` - Logged in user performing the deletion, if any
    /// - `target_id` - Account to delete
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The deleted account
    /// - `Err(AdminError::CannotDeleteSelf)` - `actor_id` equals `target_id`
    /// - `Err(AdminError::UserNotFound)` - No account with `target_id`
    /// - `Err(AdminError::NotAnAdmin)` - Target is an author
    pub async fn delete_admin(
        &self,
        actor_id: Option<i32>,
        target_id: i32,
    ) -> Result<UserModel, Error> {
        if actor_id == Some(target_id) {
            return Err(AdminError::CannotDeleteSelf.into());
        }

        let user_repo = UserRepository::new(self.db);
        let target = user_repo
            .get(target_id)
            .await?
            .ok_or(AdminError::UserNotFound(target_id))?;

        if target.role != Role::Admin {
            return Err(AdminError::NotAnAdmin(target_id).into());
        }

        user_repo.delete(target_id).await?;

        tracing::info!(
            user_id = %target.id,
            actor_id = ?actor_id,
            "Deleted admin account {}",
            target.username
        );

        Ok(target)
    }

    /// Creates the `admin` account when no admin exists yet.
    ///
    /// Nothing is created without a password, so a fresh deployment never ships a known default
    /// credential.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - Bootstrap admin created
    /// - `Ok(None)` - An admin already exists, no password was configured, or the username is
    ///   taken by an author
    pub async fn ensure_bootstrap_admin(
        &self,
        password: Option<&str>,
    ) -> Result<Option<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.count_admins().await? > 0 {
            return Ok(None);
        }

        let Some(password) = password else {
            tracing::warn!("No admin account exists and ADMIN_PASSWORD is not set");

            return Ok(None);
        };

        if user_repo
            .find_by_username(BOOTSTRAP_ADMIN_USERNAME)
            .await?
            .is_some()
        {
            tracing::warn!(
                "No admin account exists but username {} is taken by an author",
                BOOTSTRAP_ADMIN_USERNAME
            );

            return Ok(None);
        }

        let admin = self
            .create_user(BOOTSTRAP_ADMIN_USERNAME, password, Role::Admin)
            .await?;

        Ok(Some(admin))
    }

    /// Creates an admin unless the username already exists.
    ///
    /// Returns `true` when the account was created.
    pub async fn seed_admin(&self, username: &str, password: &str) -> Result<bool, Error> {
        match self.create_user(username, password, Role::Admin).await {
            Ok(_) => Ok(true),
            Err(Error::AuthError(AuthError::UsernameTaken)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
