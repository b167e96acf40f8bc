//! mimix-client - reqwest-backed client for the Mimix promotion tracker API.
//!
//! [`Client`] covers the unauthenticated surface (login, registration);
//! a successful login yields a [`Session`] carrying the bearer token for
//! everything else. No call is ever retried and nothing is cached here;
//! callers own refresh policy (in practice: re-fetch after every write).

mod client;
mod endpoints;
mod http;
mod session;

pub use client::{Client, Registration};
pub use session::Session;
