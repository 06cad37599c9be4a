use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{admin::AdminError, Error};

/// Set once the visitor has entered the admin access key.
pub const SESSION_ADMIN_VERIFIED_KEY: &str = "contract_desk:admin:verified";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAdminVerified(pub bool);

impl SessionAdminVerified {
    pub async fn insert(session: &Session) -> Result<(), Error> {
        session
            .insert(SESSION_ADMIN_VERIFIED_KEY, SessionAdminVerified(true))
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<bool, Error> {
        Ok(session
            .get::<SessionAdminVerified>(SESSION_ADMIN_VERIFIED_KEY)
            .await?
            .map(|SessionAdminVerified(verified)| verified)
            .unwrap_or(false))
    }

    /// Returns `Err(AdminError::NotVerified)` unless the access key has been entered.
    pub async fn require(session: &Session) -> Result<(), Error> {
        if Self::get(session).await? {
            Ok(())
        } else {
            Err(AdminError::NotVerified.into())
        }
    }

    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionAdminVerified>(SESSION_ADMIN_VERIFIED_KEY)
            .await?;

        Ok(())
    }
}
