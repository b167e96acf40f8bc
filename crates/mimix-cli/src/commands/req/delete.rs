//! Delete request command implementation.

use anyhow::Result;
use clap::Args;

use mimix_core::types::RecordId;

use crate::output;
use crate::session::{self, check_authed};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the request to delete
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let id: RecordId = args.id.parse()?;

    if !output::confirm(
        &format!("This will delete request {}. Continue?", args.id),
        args.force,
    )? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let session = session::require_session().await?;
    check_authed(session.delete_request(&id).await).await?;

    output::success(&format!("Request {} deleted", args.id));

    Ok(())
}
