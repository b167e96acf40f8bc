//! Edit object command implementation.
//!
//! The backend expects the full edited field set on every save, so the
//! record is fetched first and the patch seeded from it; flags override
//! individual fields.

use anyhow::{Result, bail};
use clap::Args;

use mimix_core::types::RecordId;
use mimix_core::{MimixStatus, ObjectPatch};

use crate::commands::parse_edit_date;
use crate::output;
use crate::session::{self, check_authed};

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the object to edit
    pub id: String,

    /// New object name
    #[arg(long)]
    pub obj: Option<String>,

    /// New object type
    #[arg(long)]
    pub obj_type: Option<String>,

    /// New promote date, dd/mm/yyyy; pass an empty string to clear
    #[arg(long)]
    pub promote_date: Option<String>,

    /// New target library
    #[arg(long)]
    pub lib: Option<String>,

    /// New object version
    #[arg(long)]
    pub obj_ver: Option<String>,

    /// New developer
    #[arg(long)]
    pub developer: Option<String>,

    /// New mimix status
    #[arg(long)]
    pub status: Option<String>,

    /// New notes
    #[arg(long)]
    pub keterangan: Option<String>,
}

pub async fn run(args: EditArgs) -> Result<()> {
    let id: RecordId = args.id.parse()?;

    // Validate flag values before any network traffic
    let status = args
        .status
        .as_deref()
        .map(str::parse::<MimixStatus>)
        .transpose()?;
    let promote_date = args
        .promote_date
        .as_deref()
        .map(parse_edit_date)
        .transpose()?;

    let session = session::require_session().await?;

    let records = check_authed(session.list_objects("").await).await?;
    let Some(record) = records.iter().find(|r| r.id == id) else {
        bail!("Object {} not found", args.id);
    };

    let mut patch = ObjectPatch::from_record(record);
    if let Some(obj) = args.obj {
        patch.obj = obj;
    }
    if let Some(obj_type) = args.obj_type {
        patch.obj_type = obj_type;
    }
    if let Some(date) = promote_date {
        patch.promote_date = date;
    }
    if let Some(lib) = args.lib {
        patch.lib = lib;
    }
    if let Some(obj_ver) = args.obj_ver {
        patch.obj_ver = obj_ver;
    }
    if let Some(developer) = args.developer {
        patch.developer = developer;
    }
    if let Some(status) = status {
        patch.mimix_status = status;
    }
    if let Some(keterangan) = args.keterangan {
        patch.keterangan = keterangan;
    }

    let updated = check_authed(session.update_object(&id, &patch).await).await?;

    output::success(&format!("Object {} updated", updated.obj));
    output::field("Status", updated.mimix_status.as_str());

    Ok(())
}
