use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{error::Error, model::session::flash::SessionFlash};

/// Shown instead of the details of database and other internal failures.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again";

/// Turns the outcome of a form action into a flash message.
///
/// Success messages and user-facing errors are shown verbatim. Internal errors are logged and
/// replaced with [`GENERIC_ERROR_MESSAGE`]. Only session failures are returned as `Err`.
///
/// Returns `true` when the action succeeded.
pub async fn flash_outcome(
    session: &Session,
    outcome: Result<String, Error>,
) -> Result<bool, Error> {
    match outcome {
        Ok(message) => {
            SessionFlash::success(session, message).await?;

            Ok(true)
        }
        Err(err) => {
            match err.user_message() {
                Some(message) => {
                    tracing::debug!("Form action rejected: {}", err);

                    SessionFlash::error(session, message).await?;
                }
                None => {
                    tracing::error!("Form action failed: {}", err);

                    SessionFlash::error(session, GENERIC_ERROR_MESSAGE).await?;
                }
            }

            Ok(false)
        }
    }
}
