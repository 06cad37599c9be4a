use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, TestContext};

static TEST_PASSWORD_HASH: OnceLock<String> = OnceLock::new();

/// Argon2 hash of [`TEST_PASSWORD`], computed once per test binary.
pub fn test_password_hash() -> Result<String, TestError> {
    if let Some(hash) = TEST_PASSWORD_HASH.get() {
        return Ok(hash.clone());
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .map_err(|e| TestError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(TEST_PASSWORD_HASH.get_or_init(|| hash).clone())
}

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is [`TEST_PASSWORD`].
    pub async fn insert_user(&self, username: &str, role: Role) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(test_password_hash()?),
                role: ActiveValue::Set(role),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_admin(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(username, Role::Admin).await
    }

    pub async fn insert_author(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(username, Role::Author).await
    }

    /// Find a user inserted by the builder.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, TestError> {
        use sea_orm::{ColumnTrait, QueryFilter};

        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.test.db)
            .await?)
    }
}
