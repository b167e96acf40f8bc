//! Paginated table state with an inline row editor.
//!
//! The dashboard this client fronts keeps one table per view: a cached
//! collection, a 1-based page cursor, and at most one row mid-edit. This
//! module models that as an explicit state struct per view instead of
//! module-level globals, with the single-edit invariant enforced by the
//! [`controller::EditState`] transitions rather than call ordering.

pub mod controller;
pub mod pager;

pub use controller::{EditState, ListController, Row};
pub use pager::{PAGE_SIZE, PageButton, PageStrip};

use crate::types::RecordId;

/// Typed view-model for a table row.
///
/// `cells` is the display rendering (formatted dates, badge text);
/// `edit_cells` is the field set an inline editor is pre-populated with,
/// dates in `dd/mm/yyyy`.
pub trait TableRow {
    /// Backend identity of the record.
    fn id(&self) -> &RecordId;

    /// Display cells, in column order.
    fn cells(&self) -> Vec<String>;

    /// Editable field values, in column order.
    fn edit_cells(&self) -> Vec<String>;
}
