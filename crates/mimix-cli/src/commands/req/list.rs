//! List requests command implementation.

use anyhow::Result;
use clap::Args;

use mimix_core::ObjectRequest;
use mimix_core::table::ListController;

use crate::output;
use crate::session::{self, check_authed};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search query (matches object names)
    #[arg(default_value = "")]
    pub query: String,

    /// Page to display
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = session::require_session().await?;

    let mut table: ListController<ObjectRequest> = ListController::new("No requests found.");
    match check_authed(session.list_requests(&args.query).await).await {
        Ok(records) => table.set_records(records, &args.query),
        Err(e) => return Err(e),
    }

    if args.page != 1 && !table.set_page(args.page) {
        output::error(&format!(
            "Page {} is out of range ({} page(s) available)",
            args.page,
            table.total_pages().max(1)
        ));
        std::process::exit(1);
    }

    output::table(super::HEADERS, &table.page_rows());
    output::page_strip(table.page_strip().as_ref());

    Ok(())
}
