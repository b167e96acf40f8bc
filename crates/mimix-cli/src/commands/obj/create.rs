//! Create object command implementation.

use anyhow::Result;
use clap::Args;

use mimix_core::{MimixStatus, NewObject};

use crate::commands::form_date_field;
use crate::output;
use crate::session::{self, check_authed};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Object name
    #[arg(long)]
    pub obj: String,

    /// Object type (e.g. PGM, SRVPGM)
    #[arg(long)]
    pub obj_type: String,

    /// Target library
    #[arg(long)]
    pub lib: String,

    /// Promote date, dd/mm/yyyy
    #[arg(long)]
    pub promote_date: Option<String>,

    /// Object version
    #[arg(long)]
    pub obj_ver: String,

    /// Developer responsible for the object
    #[arg(long)]
    pub developer: String,

    /// Mimix status: pending, "on progress", done or error
    #[arg(long, default_value = "pending")]
    pub status: String,

    /// Free-form notes
    #[arg(long)]
    pub keterangan: Option<String>,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let status: MimixStatus = args.status.parse()?;
    let promote_date = form_date_field(args.promote_date.as_deref())?;

    let new = NewObject {
        obj: args.obj,
        obj_type: args.obj_type,
        lib: args.lib,
        promote_date,
        obj_ver: args.obj_ver,
        developer: args.developer,
        mimix_status: status,
        keterangan: args.keterangan,
    };

    let session = session::require_session().await?;
    let created = check_authed(session.create_object(&new).await).await?;

    output::success(&format!("Object {} created", created.obj));
    output::field("Id", created.id.as_str());
    output::field("Status", created.mimix_status.as_str());

    Ok(())
}
