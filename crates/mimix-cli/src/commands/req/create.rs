//! Create request command implementation.

use anyhow::Result;
use clap::Args;

use mimix_core::NewRequest;

use crate::commands::form_date_field;
use crate::output;
use crate::session::{self, check_authed};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Object name to request promotion for
    #[arg(long)]
    pub obj_name: String,

    /// Target library
    #[arg(long)]
    pub lib: String,

    /// Object version
    #[arg(long)]
    pub obj_ver: String,

    /// Object type
    #[arg(long)]
    pub obj_type: String,

    /// Requested promote date, dd/mm/yyyy
    #[arg(long)]
    pub promote_date: Option<String>,

    /// Developer responsible for the object
    #[arg(long)]
    pub developer: String,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let promote_date = form_date_field(args.promote_date.as_deref())?;

    let new = NewRequest {
        obj_name: args.obj_name,
        lib: args.lib,
        obj_ver: args.obj_ver,
        obj_type: args.obj_type,
        promote_date,
        developer: args.developer,
    };

    let session = session::require_session().await?;
    let created = check_authed(session.create_request(&new).await).await?;

    output::success(&format!("Request for {} created", created.obj_name));
    output::field("Id", created.id.as_str());
    output::field("Requester", &created.requester);
    output::field("Status", created.req_status.as_str());

    Ok(())
}
