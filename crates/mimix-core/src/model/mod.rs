//! Wire data model for the Mimix API.
//!
//! Field names and enum spellings follow the backend exactly, including
//! the space in `"on progress"` and the empty-string promote status.

mod object;
mod request;

pub use object::{MimixObject, MimixStatus, NewObject, ObjectPatch};
pub use request::{NewRequest, ObjectRequest, PromoteStatus, ReqStatus, RequestPatch};

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// An authenticated user, as returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub job: String,
}
