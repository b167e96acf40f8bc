//! Subcommand implementations.

pub mod browse;
pub mod login;
pub mod logout;
pub mod obj;
pub mod register;
pub mod req;
pub mod whoami;

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};

use mimix_core::dates::{self, FormDate};

/// Parse a `--promote-date` value on an edit. Empty input clears the
/// date; anything else must parse.
pub(crate) fn parse_edit_date(input: &str) -> Result<Option<DateTime<Utc>>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    match dates::parse_display(input) {
        Some(date) => Ok(Some(date)),
        None => bail!("Invalid date '{}'. Use dd/mm/yyyy.", input),
    }
}

/// Convert a creation-form date flag into the wire value.
///
/// Free-form values that fail every parse are submitted verbatim, like
/// the dashboard's creation form does.
pub(crate) fn form_date_field(input: Option<&str>) -> Result<Option<String>> {
    let Some(input) = input else { return Ok(None) };
    if input.trim().is_empty() {
        return Ok(None);
    }

    match dates::convert_form_date(input) {
        FormDate::Iso(date) => Ok(Some(date.to_rfc3339())),
        FormDate::Invalid => bail!("Invalid date format. Please use dd/mm/yyyy."),
        FormDate::Verbatim(raw) => Ok(Some(raw)),
    }
}
