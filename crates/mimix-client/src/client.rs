//! Unauthenticated API surface: login and registration.

use tracing::{debug, instrument};

use mimix_core::error::AuthError;
use mimix_core::types::ApiUrl;
use mimix_core::{AccessToken, Credentials, Error, Result, User};

use crate::endpoints::{self, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::http::ApiClient;
use crate::session::Session;

/// Registration form fields.
///
/// The confirmation is checked locally before any request is sent, like
/// the registration page does.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub job: String,
    pub password: String,
    pub confirm_password: String,
}

/// An unauthenticated client for a Mimix API server.
#[derive(Debug, Clone)]
pub struct Client {
    api: ApiUrl,
    http: ApiClient,
}

impl Client {
    /// Create a new client for the given API base URL.
    pub fn new(api: ApiUrl) -> Self {
        let http = ApiClient::new(api.clone());
        Self { api, http }
    }

    /// Returns the API base URL for this client.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Authenticate and return a session holding the issued token.
    ///
    /// A rejected login surfaces the server's message verbatim as
    /// [`AuthError::InvalidCredentials`].
    #[instrument(skip(self, credentials), fields(api = %self.api, username = credentials.username()))]
    pub async fn login(&self, credentials: Credentials) -> Result<Session> {
        debug!("Logging in");

        let request = LoginRequest {
            username: credentials.username(),
            pass: credentials.password(),
        };

        let response: LoginResponse = match self.http.post(endpoints::LOGIN, &request).await {
            Ok(response) => response,
            Err(Error::Api(e)) if e.is_unauthorized() => {
                return Err(AuthError::InvalidCredentials {
                    message: e.message_or("invalid username or password"),
                }
                .into());
            }
            Err(e) => return Err(e),
        };

        Ok(Session::new(
            self.http.clone(),
            AccessToken::new(response.access_token),
            response.user,
        ))
    }

    /// Create a new user account.
    ///
    /// Short-circuits with [`AuthError::PasswordMismatch`] and zero
    /// network traffic when the confirmation does not match.
    #[instrument(skip(self, registration), fields(api = %self.api, username = %registration.username))]
    pub async fn register(&self, registration: &Registration) -> Result<User> {
        if registration.password != registration.confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }

        debug!("Creating user");

        let request = RegisterRequest {
            username: &registration.username,
            job: &registration.job,
            password: &registration.password,
            confirm_password: &registration.confirm_password,
        };

        let response: RegisterResponse = self.http.post(endpoints::CREATE_USER, &request).await?;
        Ok(response.user)
    }
}
