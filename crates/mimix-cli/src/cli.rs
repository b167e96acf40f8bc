//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{browse, login, logout, obj, register, req, whoami};

/// Admin client for the Mimix promotion tracker.
#[derive(Parser, Debug)]
#[command(name = "mimix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(login::LoginArgs),

    /// Create a new user account
    Register(register::RegisterArgs),

    /// Clear the stored session
    Logout(logout::LogoutArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Mimix object operations
    Obj(obj::ObjCommand),

    /// Object request operations
    Req(req::ReqCommand),

    /// Interactive table browser
    Browse(browse::BrowseArgs),
}
