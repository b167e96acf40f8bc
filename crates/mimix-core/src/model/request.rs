//! Object request record and its payload types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{Error, InvalidInputError};
use crate::table::TableRow;
use crate::types::RecordId;

/// A pending request to promote an artifact, convertible into a
/// [`MimixObject`](crate::MimixObject).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRequest {
    pub id: RecordId,
    pub obj_name: String,
    pub requester: String,
    /// Server-set on every update.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub lib: String,
    pub obj_ver: String,
    pub obj_type: String,
    #[serde(default)]
    pub promote_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub promote_status: PromoteStatus,
    pub req_status: ReqStatus,
}

/// Deployment progress of a request. Unset on the wire is the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromoteStatus {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "in_progress")]
    InProgress,
    #[serde(rename = "deployed")]
    Deployed,
}

impl PromoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoteStatus::Unset => "",
            PromoteStatus::InProgress => "in_progress",
            PromoteStatus::Deployed => "deployed",
        }
    }
}

impl fmt::Display for PromoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Badges show "-" for unset, like the dashboard
        match self {
            PromoteStatus::Unset => f.write_str("-"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for PromoteStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "-" | "unset" | "none" => Ok(PromoteStatus::Unset),
            "in_progress" | "in-progress" | "in progress" => Ok(PromoteStatus::InProgress),
            "deployed" => Ok(PromoteStatus::Deployed),
            other => Err(InvalidInputError::Other {
                message: format!(
                    "invalid promote status '{}', expected in_progress, deployed or none",
                    other
                ),
            }
            .into()),
        }
    }
}

/// Fulfillment status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReqStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "completed")]
    Completed,
}

impl ReqStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReqStatus::Pending => "pending",
            ReqStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ReqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReqStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ReqStatus::Pending),
            "completed" => Ok(ReqStatus::Completed),
            other => Err(InvalidInputError::Other {
                message: format!(
                    "invalid request status '{}', expected pending or completed",
                    other
                ),
            }
            .into()),
        }
    }
}

/// Full edited field set sent on a request save.
///
/// Unlike [`ObjectPatch`](crate::ObjectPatch), the dashboard omits
/// `promote_date` entirely when the field is left empty.
#[derive(Debug, Clone, Serialize)]
pub struct RequestPatch {
    pub obj_name: String,
    pub lib: String,
    pub obj_ver: String,
    pub obj_type: String,
    pub developer: String,
    pub req_status: ReqStatus,
    pub promote_status: PromoteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promote_date: Option<DateTime<Utc>>,
}

impl RequestPatch {
    /// Seed a patch from a cached record.
    pub fn from_record(record: &ObjectRequest) -> Self {
        Self {
            obj_name: record.obj_name.clone(),
            lib: record.lib.clone(),
            obj_ver: record.obj_ver.clone(),
            obj_type: record.obj_type.clone(),
            developer: record.developer.clone().unwrap_or_default(),
            req_status: record.req_status,
            promote_status: record.promote_status,
            promote_date: record.promote_date,
        }
    }
}

/// Creation payload for a new request. The requester is derived from the
/// bearer token server-side.
#[derive(Debug, Clone, Serialize)]
pub struct NewRequest {
    pub obj_name: String,
    pub lib: String,
    pub obj_ver: String,
    pub obj_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promote_date: Option<String>,
    pub developer: String,
}

impl TableRow for ObjectRequest {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        let updated = match self.updated_at.as_ref() {
            Some(d) => d.format("%d/%m/%Y %H:%M").to_string(),
            None => "-".to_string(),
        };
        let promote = match self.promote_date.as_ref() {
            Some(d) => dates::format_display(Some(d)),
            None => "-".to_string(),
        };
        vec![
            self.obj_name.clone(),
            self.requester.clone(),
            updated,
            self.lib.clone(),
            self.obj_ver.clone(),
            self.obj_type.clone(),
            promote,
            self.developer.clone().unwrap_or_else(|| "-".to_string()),
            self.promote_status.to_string(),
            self.req_status.to_string(),
        ]
    }

    fn edit_cells(&self) -> Vec<String> {
        vec![
            self.obj_name.clone(),
            // requester and updated_at are not editable; shown as-is
            self.requester.clone(),
            self.updated_at
                .as_ref()
                .map(|d| d.format("%d/%m/%Y %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.lib.clone(),
            self.obj_ver.clone(),
            self.obj_type.clone(),
            dates::format_display(self.promote_date.as_ref()),
            self.developer.clone().unwrap_or_default(),
            self.promote_status.as_str().to_string(),
            self.req_status.to_string(),
        ]
    }
}
