//! Object request subcommand implementations.

mod convert;
mod create;
mod delete;
mod edit;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

/// Table headers for the requests view.
pub const HEADERS: &[&str] = &[
    "OBJECT",
    "REQUESTER",
    "UPDATED",
    "LIB",
    "VER",
    "TYPE",
    "PROMOTE DATE",
    "DEVELOPER",
    "PROMOTE",
    "STATUS",
];

#[derive(Args, Debug)]
pub struct ReqCommand {
    #[command(subcommand)]
    pub command: ReqSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReqSubcommand {
    /// List requests, optionally filtered by a search query
    List(list::ListArgs),

    /// Create a new request
    Create(create::CreateArgs),

    /// Edit a request's fields
    Edit(edit::EditArgs),

    /// Delete a request
    Delete(delete::DeleteArgs),

    /// Convert a request into a tracked object
    Convert(convert::ConvertArgs),
}

pub async fn handle(cmd: ReqCommand) -> Result<()> {
    match cmd.command {
        ReqSubcommand::List(args) => list::run(args).await,
        ReqSubcommand::Create(args) => create::run(args).await,
        ReqSubcommand::Edit(args) => edit::run(args).await,
        ReqSubcommand::Delete(args) => delete::run(args).await,
        ReqSubcommand::Convert(args) => convert::run(args).await,
    }
}
