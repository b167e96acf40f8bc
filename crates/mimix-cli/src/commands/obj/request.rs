//! Add-object-to-request command implementation.
//!
//! Opens a promotion request pre-filled from an existing object, the
//! backend copying the object's fields into the new request.

use anyhow::Result;
use clap::Args;

use mimix_core::types::RecordId;

use crate::output;
use crate::session::{self, check_authed};

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Id of the object to open a request for
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: RequestArgs) -> Result<()> {
    let id: RecordId = args.id.parse()?;

    if !output::confirm(
        &format!("Open a promotion request for object {}?", args.id),
        args.force,
    )? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let session = session::require_session().await?;
    check_authed(session.add_object_to_request(&id).await).await?;

    output::success(&format!("Request opened for object {}", args.id));

    Ok(())
}
