//! HTTP plumbing shared by every API call.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use mimix_core::error::{ApiError, AuthError, TransportError};
use mimix_core::types::ApiUrl;
use mimix_core::{Error, Result};

use crate::endpoints::ErrorBody;

/// Thin reqwest wrapper: builds endpoint URLs, attaches the bearer
/// header, and maps error responses into the crate error taxonomy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    pub fn new(api: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("mimix/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, api }
    }

    /// Returns the API base URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Unauthenticated POST (login, registration).
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "API procedure");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest)?;

        handle_response(response, false).await
    }

    /// Authenticated GET of a collection. A `null` body counts as an
    /// empty collection, never an error.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn get_list_authed<R>(&self, url: &str, token: &str) -> Result<Vec<R>>
    where
        R: DeserializeOwned,
    {
        debug!(url, "API authenticated list");

        let response = self
            .client
            .get(url)
            .headers(auth_headers(token))
            .send()
            .await
            .map_err(map_reqwest)?;

        let items: Option<Vec<R>> = handle_response(response, true).await?;
        Ok(items.unwrap_or_default())
    }

    /// Authenticated POST with a JSON body.
    #[instrument(skip(self, body, token), fields(api = %self.api))]
    pub async fn post_authed<B, R>(&self, path: &str, body: &B, token: &str) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "API authenticated procedure");

        let response = self
            .client
            .post(&url)
            .json(body)
            .headers(auth_headers(token))
            .send()
            .await
            .map_err(map_reqwest)?;

        handle_response(response, true).await
    }

    /// Authenticated POST with no body, returning a parsed response.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn post_authed_no_body<R>(&self, path: &str, token: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "API authenticated procedure (no body)");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await
            .map_err(map_reqwest)?;

        handle_response(response, true).await
    }

    /// Authenticated POST with no body and no interesting response.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn post_authed_empty(&self, path: &str, token: &str) -> Result<()> {
        let url = self.api.endpoint(path);
        debug!(path, "API authenticated procedure (no response)");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await
            .map_err(map_reqwest)?;

        handle_no_content(response).await
    }

    /// Authenticated PATCH with a JSON body.
    #[instrument(skip(self, body, token), fields(api = %self.api))]
    pub async fn patch_authed<B, R>(&self, path: &str, body: &B, token: &str) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "API authenticated patch");

        let response = self
            .client
            .patch(&url)
            .json(body)
            .headers(auth_headers(token))
            .send()
            .await
            .map_err(map_reqwest)?;

        handle_response(response, true).await
    }

    /// Authenticated DELETE.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn delete_authed(&self, path: &str, token: &str) -> Result<()> {
        let url = self.api.endpoint(path);
        debug!(path, "API authenticated delete");

        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await
            .map_err(map_reqwest)?;

        handle_no_content(response).await
    }
}

/// Create authorization headers for authenticated requests.
fn auth_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let auth_value = format!("Bearer {}", token);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&auth_value).expect("invalid token characters"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Handle a response, parsing the body or error.
async fn handle_response<R: DeserializeOwned>(response: reqwest::Response, authed: bool) -> Result<R> {
    let status = response.status();
    trace!(status = %status, "API response");

    if status.is_success() {
        let body = response.json::<R>().await.map_err(map_reqwest)?;
        Ok(body)
    } else {
        Err(error_from_response(response, authed).await)
    }
}

/// Handle a response whose body we discard on success.
async fn handle_no_content(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    trace!(status = %status, "API response");

    if status.is_success() {
        Ok(())
    } else {
        Err(error_from_response(response, true).await)
    }
}

/// Parse a failure response into the error taxonomy.
///
/// Any unauthorized status on an authenticated call is fatal to the
/// session regardless of endpoint; everything else surfaces the server's
/// `error` field verbatim when present.
async fn error_from_response(response: reqwest::Response, authed: bool) -> Error {
    let status = response.status().as_u16();

    if authed && status == 401 {
        return AuthError::Unauthorized.into();
    }

    // Try to parse the {"error": ...} body; fall back to status only
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => None,
    };

    ApiError::new(status, message).into()
}

/// Map reqwest failures onto the transport error taxonomy.
fn map_reqwest(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
