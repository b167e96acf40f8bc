//! Authenticated session over the Mimix API.

use tracing::{debug, instrument};

use mimix_core::types::{ApiUrl, RecordId};
use mimix_core::{
    AccessToken, MimixObject, NewObject, NewRequest, ObjectPatch, ObjectRequest, RequestPatch,
    Result, User,
};

use crate::endpoints;
use crate::http::ApiClient;

/// An authenticated session: the bearer token plus the logged-in user.
///
/// Every call attaches the token; any unauthorized response comes back as
/// [`AuthError::Unauthorized`](mimix_core::error::AuthError::Unauthorized),
/// at which point the caller must discard persisted credentials. There is
/// no refresh flow; the token is immutable for the session's lifetime.
#[derive(Clone)]
pub struct Session {
    http: ApiClient,
    token: AccessToken,
    user: User,
}

impl Session {
    pub(crate) fn new(http: ApiClient, token: AccessToken, user: User) -> Self {
        Self { http, token, user }
    }

    /// Restore a session from persisted state.
    pub fn from_persisted(api: ApiUrl, token: AccessToken, user: User) -> Self {
        Self::new(ApiClient::new(api), token, user)
    }

    /// Returns the API base URL for this session.
    pub fn api(&self) -> &ApiUrl {
        self.http.api()
    }

    /// Returns the logged-in user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Export the access token for persistence.
    pub fn access_token(&self) -> &AccessToken {
        &self.token
    }

    /// List objects, optionally scoped by a search query.
    #[instrument(skip(self), fields(username = %self.user.username))]
    pub async fn list_objects(&self, query: &str) -> Result<Vec<MimixObject>> {
        debug!("Listing objects");
        let url = self.api().search_endpoint(endpoints::OBJ_SEARCH, query);
        self.http.get_list_authed(&url, self.token.as_str()).await
    }

    /// List object requests, optionally scoped by a search query.
    #[instrument(skip(self), fields(username = %self.user.username))]
    pub async fn list_requests(&self, query: &str) -> Result<Vec<ObjectRequest>> {
        debug!("Listing requests");
        let url = self.api().search_endpoint(endpoints::OBJ_REQ_SEARCH, query);
        self.http.get_list_authed(&url, self.token.as_str()).await
    }

    /// Create a new object.
    #[instrument(skip(self, new), fields(obj = %new.obj))]
    pub async fn create_object(&self, new: &NewObject) -> Result<MimixObject> {
        debug!("Creating object");
        self.http
            .post_authed(endpoints::ADD_MIMIX_OBJ, new, self.token.as_str())
            .await
    }

    /// Send the full edited field set for an object.
    #[instrument(skip(self, patch), fields(%id))]
    pub async fn update_object(&self, id: &RecordId, patch: &ObjectPatch) -> Result<MimixObject> {
        debug!("Updating object");
        self.http
            .patch_authed(&endpoints::update_obj_info(id), patch, self.token.as_str())
            .await
    }

    /// Delete an object.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_object(&self, id: &RecordId) -> Result<()> {
        debug!("Deleting object");
        self.http
            .delete_authed(&endpoints::delete_obj(id), self.token.as_str())
            .await
    }

    /// Create a request pre-filled from an existing object.
    #[instrument(skip(self), fields(%id))]
    pub async fn add_object_to_request(&self, id: &RecordId) -> Result<()> {
        debug!("Adding object to request");
        self.http
            .post_authed_empty(&endpoints::add_obj_to_req(id), self.token.as_str())
            .await
    }

    /// Create a new request. The requester is taken from the token
    /// server-side.
    #[instrument(skip(self, new), fields(obj_name = %new.obj_name))]
    pub async fn create_request(&self, new: &NewRequest) -> Result<ObjectRequest> {
        debug!("Creating request");
        self.http
            .post_authed(endpoints::CREATE_OBJ_REQ, new, self.token.as_str())
            .await
    }

    /// Send the full edited field set for a request.
    #[instrument(skip(self, patch), fields(%id))]
    pub async fn update_request(
        &self,
        id: &RecordId,
        patch: &RequestPatch,
    ) -> Result<ObjectRequest> {
        debug!("Updating request");
        self.http
            .patch_authed(&endpoints::update_req_info(id), patch, self.token.as_str())
            .await
    }

    /// Delete a request.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete_request(&self, id: &RecordId) -> Result<()> {
        debug!("Deleting request");
        self.http
            .delete_authed(&endpoints::delete_req(id), self.token.as_str())
            .await
    }

    /// Convert a request into an object, returning the converted object.
    #[instrument(skip(self), fields(%id))]
    pub async fn convert_request(&self, id: &RecordId) -> Result<MimixObject> {
        debug!("Converting request");
        self.http
            .post_authed_no_body(&endpoints::convert_req(id), self.token.as_str())
            .await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api", self.http.api())
            .field("user", &self.user.username)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
