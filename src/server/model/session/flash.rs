//! One-shot flash messages shown on the next rendered page.
//!
//! Handlers push messages before redirecting; the page that renders next takes them out of the
//! session, so each message is shown exactly once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_FLASH_KEY: &str = "contract_desk:flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

impl FlashKind {
    /// CSS class used by the layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}

pub struct SessionFlash;

impl SessionFlash {
    /// Appends a message to the pending flash messages.
    pub async fn push(
        session: &Session,
        kind: FlashKind,
        message: impl Into<String>,
    ) -> Result<(), Error> {
        let mut messages = session
            .get::<Vec<FlashMessage>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        messages.push(FlashMessage {
            kind,
            message: message.into(),
        });

        session.insert(SESSION_FLASH_KEY, messages).await?;

        Ok(())
    }

    pub async fn success(session: &Session, message: impl Into<String>) -> Result<(), Error> {
        Self::push(session, FlashKind::Success, message).await
    }

    pub async fn error(session: &Session, message: impl Into<String>) -> Result<(), Error> {
        Self::push(session, FlashKind::Error, message).await
    }

    pub async fn info(session: &Session, message: impl Into<String>) -> Result<(), Error> {
        Self::push(session, FlashKind::Info, message).await
    }

    /// Removes and returns all pending messages, oldest first.
    pub async fn take(session: &Session) -> Result<Vec<FlashMessage>, Error> {
        Ok(session
            .remove::<Vec<FlashMessage>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default())
    }
}
