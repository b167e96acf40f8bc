//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use mimix_client::{Client, Registration};
use mimix_core::error::AuthError;
use mimix_core::types::ApiUrl;
use mimix_core::Error;

use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username for the new account
    #[arg(long)]
    pub username: String,

    /// Job title shown on the dashboard
    #[arg(long)]
    pub job: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Password confirmation
    #[arg(long)]
    pub confirm_password: String,

    /// API base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub api: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let api = ApiUrl::new(&args.api).context("Invalid API URL")?;

    let registration = Registration {
        username: args.username,
        job: args.job,
        password: args.password,
        confirm_password: args.confirm_password,
    };

    let client = Client::new(api);
    let user = match client.register(&registration).await {
        Ok(user) => user,
        Err(Error::Auth(AuthError::PasswordMismatch)) => {
            output::error("Passwords do not match");
            std::process::exit(1);
        }
        Err(Error::Api(e)) => {
            output::error(&e.message_or("Registration failed"));
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to register"),
    };

    output::success(&format!("User {} created", user.username));
    output::field("Job", &user.job);
    eprintln!("Run 'mimix login' to start a session.");

    Ok(())
}
