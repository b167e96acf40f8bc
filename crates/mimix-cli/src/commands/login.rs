//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use mimix_client::Client;
use mimix_core::error::AuthError;
use mimix_core::types::ApiUrl;
use mimix_core::{Credentials, Error};

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate with
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// API base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub api: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let api = ApiUrl::new(&args.api).context("Invalid API URL")?;
    let credentials = Credentials::new(&args.username, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let client = Client::new(api);
    let session = match client.login(credentials).await {
        Ok(session) => session,
        Err(Error::Auth(AuthError::InvalidCredentials { message })) => {
            output::error(&message);
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to login"),
    };

    // Save session
    storage::save_session(&session)
        .await
        .context("Failed to save session")?;

    // Print success
    output::success("Logged in successfully");
    println!();
    output::field("User", &session.user().username);
    output::field("Job", &session.user().job);
    output::field("API", session.api().as_str());

    Ok(())
}
