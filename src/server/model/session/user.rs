//! Logged in user, kept in the session as the numeric account ID.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "contract_desk:user:id";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.insert(SESSION_USER_ID_KEY, Self(user_id)).await?;

        Ok(())
    }

    /// `None` for anonymous visitors. A value that does not deserialize as an ID is a session
    /// error.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session.get::<Self>(SESSION_USER_ID_KEY).await?;

        Ok(user_id.map(|Self(id)| id))
    }
}
