use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::db::UserModel,
    service::user::UserService,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new author account.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created author
    /// - `Err(Error::AuthError(AuthError::MissingCredentials))` - Blank username or empty password
    /// - `Err(Error::AuthError(AuthError::UsernameTaken))` - Username already exists
    pub async fn register(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        UserService::new(self.db)
            .create_user(username, password, Role::Author)
            .await
    }

    /// Checks credentials and returns the matching user.
    ///
    /// Unknown usernames and wrong passwords both yield `AuthError::InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        let username = username.trim();

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            tracing::debug!(username = %username, "Login attempt for unknown username");

            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");

            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
