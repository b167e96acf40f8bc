//! Mimix object subcommand implementations.

mod create;
mod delete;
mod edit;
mod list;
mod request;

use anyhow::Result;
use clap::{Args, Subcommand};

/// Table headers for the objects view.
pub const HEADERS: &[&str] = &[
    "OBJECT", "TYPE", "PROMOTE DATE", "LIB", "VER", "STATUS", "DEVELOPER", "NOTES",
];

#[derive(Args, Debug)]
pub struct ObjCommand {
    #[command(subcommand)]
    pub command: ObjSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ObjSubcommand {
    /// List objects, optionally filtered by a search query
    List(list::ListArgs),

    /// Create a new object
    Create(create::CreateArgs),

    /// Edit an object's fields
    Edit(edit::EditArgs),

    /// Delete an object
    Delete(delete::DeleteArgs),

    /// Open a promotion request for an object
    Request(request::RequestArgs),
}

pub async fn handle(cmd: ObjCommand) -> Result<()> {
    match cmd.command {
        ObjSubcommand::List(args) => list::run(args).await,
        ObjSubcommand::Create(args) => create::run(args).await,
        ObjSubcommand::Edit(args) => edit::run(args).await,
        ObjSubcommand::Delete(args) => delete::run(args).await,
        ObjSubcommand::Request(args) => request::run(args).await,
    }
}
