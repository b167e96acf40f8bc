//! Convert request command implementation.
//!
//! Turns a pending request into a tracked object. The backend creates
//! the object and removes the request in one step.

use anyhow::Result;
use clap::Args;

use mimix_core::types::RecordId;

use crate::output;
use crate::session::{self, check_authed};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Id of the request to convert
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: ConvertArgs) -> Result<()> {
    let id: RecordId = args.id.parse()?;

    if !output::confirm(
        &format!("Convert request {} into an object?", args.id),
        args.force,
    )? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let session = session::require_session().await?;
    let object = check_authed(session.convert_request(&id).await).await?;

    output::success(&format!("Request converted into object {}", object.obj));
    output::field("Id", object.id.as_str());
    output::field("Status", object.mimix_status.as_str());

    Ok(())
}
