//! Edit request command implementation.
//!
//! Like object edits, the backend expects the full edited field set, so
//! the record is fetched and the patch seeded before flags are applied.
//! The requester and update timestamp are server-owned and not editable.

use anyhow::{Result, bail};
use clap::Args;

use mimix_core::types::RecordId;
use mimix_core::{PromoteStatus, ReqStatus, RequestPatch};

use crate::commands::parse_edit_date;
use crate::output;
use crate::session::{self, check_authed};

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the request to edit
    pub id: String,

    /// New object name
    #[arg(long)]
    pub obj_name: Option<String>,

    /// New target library
    #[arg(long)]
    pub lib: Option<String>,

    /// New object version
    #[arg(long)]
    pub obj_ver: Option<String>,

    /// New object type
    #[arg(long)]
    pub obj_type: Option<String>,

    /// New promote date, dd/mm/yyyy; pass an empty string to clear
    #[arg(long)]
    pub promote_date: Option<String>,

    /// New developer
    #[arg(long)]
    pub developer: Option<String>,

    /// New promote status: in_progress, deployed or none
    #[arg(long)]
    pub promote_status: Option<String>,

    /// New request status: pending or completed
    #[arg(long)]
    pub req_status: Option<String>,
}

pub async fn run(args: EditArgs) -> Result<()> {
    let id: RecordId = args.id.parse()?;

    // Validate flag values before any network traffic
    let promote_status = args
        .promote_status
        .as_deref()
        .map(str::parse::<PromoteStatus>)
        .transpose()?;
    let req_status = args
        .req_status
        .as_deref()
        .map(str::parse::<ReqStatus>)
        .transpose()?;
    let promote_date = args
        .promote_date
        .as_deref()
        .map(parse_edit_date)
        .transpose()?;

    let session = session::require_session().await?;

    let records = check_authed(session.list_requests("").await).await?;
    let Some(record) = records.iter().find(|r| r.id == id) else {
        bail!("Request {} not found", args.id);
    };

    let mut patch = RequestPatch::from_record(record);
    if let Some(obj_name) = args.obj_name {
        patch.obj_name = obj_name;
    }
    if let Some(lib) = args.lib {
        patch.lib = lib;
    }
    if let Some(obj_ver) = args.obj_ver {
        patch.obj_ver = obj_ver;
    }
    if let Some(obj_type) = args.obj_type {
        patch.obj_type = obj_type;
    }
    if let Some(date) = promote_date {
        patch.promote_date = date;
    }
    if let Some(developer) = args.developer {
        patch.developer = developer;
    }
    if let Some(promote_status) = promote_status {
        patch.promote_status = promote_status;
    }
    if let Some(req_status) = req_status {
        patch.req_status = req_status;
    }

    let updated = check_authed(session.update_request(&id, &patch).await).await?;

    output::success(&format!("Request for {} updated", updated.obj_name));
    output::field("Status", updated.req_status.as_str());

    Ok(())
}
