//! Mimix object record and its payload types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{Error, InvalidInputError};
use crate::table::TableRow;
use crate::types::RecordId;

/// A promoted software artifact tracked by the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MimixObject {
    pub id: RecordId,
    /// Object name.
    pub obj: String,
    pub obj_type: String,
    #[serde(default)]
    pub promote_date: Option<DateTime<Utc>>,
    pub lib: String,
    pub obj_ver: String,
    pub mimix_status: MimixStatus,
    pub developer: String,
    #[serde(default)]
    pub keterangan: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lifecycle status of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MimixStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "on progress")]
    OnProgress,
    #[serde(rename = "done")]
    Done,
    #[serde(rename = "error")]
    Error,
}

impl MimixStatus {
    /// The exact wire spelling, also used for display badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            MimixStatus::Pending => "pending",
            MimixStatus::OnProgress => "on progress",
            MimixStatus::Done => "done",
            MimixStatus::Error => "error",
        }
    }
}

impl fmt::Display for MimixStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MimixStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(MimixStatus::Pending),
            "on progress" | "on_progress" | "on-progress" => Ok(MimixStatus::OnProgress),
            "done" => Ok(MimixStatus::Done),
            "error" => Ok(MimixStatus::Error),
            other => Err(InvalidInputError::Other {
                message: format!(
                    "invalid mimix status '{}', expected pending, on progress, done or error",
                    other
                ),
            }
            .into()),
        }
    }
}

/// Full edited field set sent on an object save.
///
/// The dashboard always sends every editable field, with `null` for a
/// cleared promote date. Mirrored here so a partial update and a full
/// edit are the same request.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectPatch {
    pub obj: String,
    pub obj_type: String,
    pub promote_date: Option<DateTime<Utc>>,
    pub lib: String,
    pub obj_ver: String,
    pub developer: String,
    pub keterangan: String,
    pub mimix_status: MimixStatus,
}

impl ObjectPatch {
    /// Seed a patch from a cached record, for edits that change only
    /// some fields.
    pub fn from_record(record: &MimixObject) -> Self {
        Self {
            obj: record.obj.clone(),
            obj_type: record.obj_type.clone(),
            promote_date: record.promote_date,
            lib: record.lib.clone(),
            obj_ver: record.obj_ver.clone(),
            developer: record.developer.clone(),
            keterangan: record.keterangan.clone().unwrap_or_default(),
            mimix_status: record.mimix_status,
        }
    }
}

/// Creation payload for a new object.
///
/// Form fields are collected as flat strings; `promote_date` carries
/// whatever the form date conversion yielded, which may be a verbatim
/// free-form value (see [`crate::dates::FormDate::Verbatim`]).
#[derive(Debug, Clone, Serialize)]
pub struct NewObject {
    pub obj: String,
    pub obj_type: String,
    pub lib: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promote_date: Option<String>,
    pub obj_ver: String,
    pub developer: String,
    pub mimix_status: MimixStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keterangan: Option<String>,
}

impl TableRow for MimixObject {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        let date = match self.promote_date.as_ref() {
            Some(d) => dates::format_display(Some(d)),
            None => "-".to_string(),
        };
        vec![
            self.obj.clone(),
            self.obj_type.clone(),
            date,
            self.lib.clone(),
            self.obj_ver.clone(),
            self.mimix_status.to_string(),
            self.developer.clone(),
            self.keterangan.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn edit_cells(&self) -> Vec<String> {
        vec![
            self.obj.clone(),
            self.obj_type.clone(),
            dates::format_display(self.promote_date.as_ref()),
            self.lib.clone(),
            self.obj_ver.clone(),
            self.mimix_status.to_string(),
            self.developer.clone(),
            self.keterangan.clone().unwrap_or_default(),
        ]
    }
}
