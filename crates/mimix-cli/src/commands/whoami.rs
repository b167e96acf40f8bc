//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let session = session::require_session().await?;

    output::field("User", &session.user().username);
    output::field("Job", &session.user().job);
    output::field("API", session.api().as_str());

    Ok(())
}
