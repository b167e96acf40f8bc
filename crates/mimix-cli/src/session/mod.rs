//! Persisted session handling for the CLI.

pub mod storage;

use anyhow::{Result, anyhow};

use mimix_client::Session;
use mimix_core::Error;
use mimix_core::error::AuthError;

/// Load the stored session, failing with a login hint when none exists.
pub async fn require_session() -> Result<Session> {
    storage::load_session()
        .await?
        .ok_or_else(|| anyhow!("No active session. Run 'mimix login' first."))
}

/// Map an API error from an authenticated call into an anyhow error.
///
/// An unauthorized response means the stored token is no longer valid:
/// the session file is removed so the next command prompts for a fresh
/// login instead of failing the same way.
pub async fn check_authed<T>(result: mimix_core::Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(Error::Auth(AuthError::Unauthorized)) => {
            storage::clear_session().await?;
            Err(anyhow!(
                "Session expired or rejected. Run 'mimix login' again."
            ))
        }
        Err(e) => Err(e.into()),
    }
}
