//! Per-view list controller: fetch cache, page cursor, inline row editor.

use crate::types::RecordId;

use super::pager::{self, PageStrip};
use super::TableRow;

/// Inline-edit state of a table. At most one row is ever mid-edit.
///
/// The only transitions are [`ListController::begin_edit`] (which
/// auto-cancels an existing session for a different row),
/// [`ListController::cancel_edit`] and [`ListController::finish_edit`].
/// Replacing the cache destroys any session outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing {
        id: RecordId,
        /// Display cells of the row as rendered when the edit began,
        /// restored verbatim on cancel.
        original: Vec<String>,
    },
}

/// A row as the view should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A record in display mode.
    Display { id: RecordId, cells: Vec<String> },
    /// The record under edit, with its editable field values.
    Edit { id: RecordId, fields: Vec<String> },
    /// A full-width message row (empty collection or fetch failure).
    Notice(String),
}

/// State for one paginated table: the fetched collection, the current
/// page, the search query it was fetched with, and the edit session.
///
/// The controller never talks to the network. Callers fetch, hand the
/// result to [`set_records`](Self::set_records) or
/// [`set_error`](Self::set_error), and re-render from
/// [`page_rows`](Self::page_rows) / [`page_strip`](Self::page_strip).
#[derive(Debug)]
pub struct ListController<R: TableRow> {
    records: Vec<R>,
    page: usize,
    query: String,
    error: Option<String>,
    empty_notice: String,
    edit: EditState,
}

impl<R: TableRow> ListController<R> {
    /// Create an empty controller with the notice shown for an empty
    /// collection (e.g. "No objects found.").
    pub fn new(empty_notice: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            page: 1,
            query: String::new(),
            error: None,
            empty_notice: empty_notice.into(),
            edit: EditState::Viewing,
        }
    }

    /// Replace the cache wholesale after a fetch.
    ///
    /// Resets the cursor to page 1, clears any fetch error, and destroys
    /// an active edit session. `query` is remembered so post-mutation
    /// refreshes can repeat the same search.
    pub fn set_records(&mut self, records: Vec<R>, query: impl Into<String>) {
        self.records = records;
        self.query = query.into();
        self.page = 1;
        self.error = None;
        self.edit = EditState::Viewing;
    }

    /// Record a fetch failure. The table renders a single inline error
    /// row until the next successful fetch.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(format!("Error loading data: {}", message.into()));
        self.edit = EditState::Viewing;
    }

    /// The search query of the last successful fetch.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The cached records, in fetch order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Look up a cached record by id.
    pub fn find(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Total pages for the current cache.
    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.records.len())
    }

    /// Jump to a page. Rejects out-of-range targets; jumping to the
    /// current page is a valid no-op.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages().max(1) {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// Advance one page, if not already on the last.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page + 1)
    }

    /// Go back one page, if not already on the first.
    pub fn prev_page(&mut self) -> bool {
        self.page > 1 && self.set_page(self.page - 1)
    }

    /// Rows of the current page, with the edit overlay applied.
    pub fn page_rows(&self) -> Vec<Row> {
        if let Some(error) = &self.error {
            return vec![Row::Notice(error.clone())];
        }

        if self.records.is_empty() {
            return vec![Row::Notice(self.empty_notice.clone())];
        }

        let (start, end) = pager::window(self.page, self.records.len());
        self.records[start..end]
            .iter()
            .map(|record| match &self.edit {
                EditState::Editing { id, .. } if id == record.id() => Row::Edit {
                    id: record.id().clone(),
                    fields: record.edit_cells(),
                },
                _ => Row::Display {
                    id: record.id().clone(),
                    cells: record.cells(),
                },
            })
            .collect()
    }

    /// Pagination strip for the current cache, or `None` when everything
    /// fits one page (or a fetch error is showing).
    pub fn page_strip(&self) -> Option<PageStrip> {
        if self.error.is_some() {
            return None;
        }
        pager::strip(self.page, self.records.len())
    }

    /// Switch a row into edit mode, returning the cached record to
    /// pre-populate the form from.
    ///
    /// Any edit session on a different row is cancelled first, restoring
    /// that row to display mode. An id not present in the cache is a
    /// silent no-op.
    pub fn begin_edit(&mut self, id: &RecordId) -> Option<&R> {
        let idx = self.records.iter().position(|r| r.id() == id)?;

        if let EditState::Editing { id: active, .. } = &self.edit
            && active != id
        {
            self.edit = EditState::Viewing;
        }

        let record = &self.records[idx];
        self.edit = EditState::Editing {
            id: id.clone(),
            original: record.cells(),
        };
        Some(record)
    }

    /// Cancel the edit session for `id`, restoring the remembered row.
    /// No-op when `id` is not the row under edit.
    pub fn cancel_edit(&mut self, id: &RecordId) -> bool {
        match &self.edit {
            EditState::Editing { id: active, .. } if active == id => {
                self.edit = EditState::Viewing;
                true
            }
            _ => false,
        }
    }

    /// Clear the edit session after a successful save. The caller is
    /// expected to re-fetch; the cache is never patched locally.
    pub fn finish_edit(&mut self, id: &RecordId) -> bool {
        self.cancel_edit(id)
    }

    /// Id of the row under edit, if any.
    pub fn editing_id(&self) -> Option<&RecordId> {
        match &self.edit {
            EditState::Editing { id, .. } => Some(id),
            EditState::Viewing => None,
        }
    }

    /// The display cells remembered for restoration, while editing.
    pub fn edit_snapshot(&self) -> Option<&[String]> {
        match &self.edit {
            EditState::Editing { original, .. } => Some(original),
            EditState::Viewing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::PAGE_SIZE;
    use super::*;

    struct TestRow {
        id: RecordId,
        name: String,
    }

    impl TestRow {
        fn new(n: usize) -> Self {
            Self {
                id: RecordId::new(format!("row-{}", n)).unwrap(),
                name: format!("record {}", n),
            }
        }
    }

    impl TableRow for TestRow {
        fn id(&self) -> &RecordId {
            &self.id
        }

        fn cells(&self) -> Vec<String> {
            vec![self.name.clone(), "display".to_string()]
        }

        fn edit_cells(&self) -> Vec<String> {
            vec![self.name.clone(), "edit".to_string()]
        }
    }

    fn controller_with(n: usize) -> ListController<TestRow> {
        let mut c = ListController::new("No objects found.");
        c.set_records((0..n).map(TestRow::new).collect(), "");
        c
    }

    fn id(n: usize) -> RecordId {
        RecordId::new(format!("row-{}", n)).unwrap()
    }

    #[test]
    fn full_page_renders_page_size_rows() {
        let c = controller_with(20);
        assert_eq!(c.page_rows().len(), PAGE_SIZE);
    }

    #[test]
    fn last_page_renders_remainder() {
        let mut c = controller_with(20);
        assert!(c.set_page(3));
        assert_eq!(c.page_rows().len(), 4);
    }

    #[test]
    fn row_count_matches_window_for_every_page() {
        let total = 19;
        let mut c = controller_with(total);
        for page in 1..=c.total_pages() {
            c.set_page(page);
            let expected = PAGE_SIZE.min(total - (page - 1) * PAGE_SIZE);
            assert_eq!(c.page_rows().len(), expected, "page {}", page);
        }
    }

    #[test]
    fn empty_collection_renders_single_notice_and_no_strip() {
        let c = controller_with(0);
        let rows = c.page_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], Row::Notice("No objects found.".to_string()));
        assert!(c.page_strip().is_none());
    }

    #[test]
    fn no_strip_when_everything_fits_one_page() {
        let c = controller_with(8);
        assert!(c.page_strip().is_none());
    }

    #[test]
    fn strip_has_one_button_per_page() {
        let c = controller_with(17);
        let strip = c.page_strip().unwrap();
        assert_eq!(strip.pages.len(), 3);
        assert!(!strip.prev_enabled);
        assert!(strip.next_enabled);
    }

    #[test]
    fn fetch_resets_cursor_to_first_page() {
        let mut c = controller_with(20);
        c.set_page(3);
        c.set_records((0..20).map(TestRow::new).collect(), "orders");
        assert_eq!(c.page(), 1);
        assert_eq!(c.query(), "orders");
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut c = controller_with(20);
        assert!(!c.prev_page());
        assert!(!c.set_page(0));
        assert!(!c.set_page(4));
        assert!(c.next_page());
        assert!(c.next_page());
        assert!(!c.next_page());
        assert_eq!(c.page(), 3);
    }

    #[test]
    fn jump_to_current_page_is_in_range() {
        let mut c = controller_with(20);
        assert!(c.set_page(3));
        // Jumping to the page already shown succeeds without moving
        assert!(c.set_page(3));
        assert_eq!(c.page(), 3);
    }

    #[test]
    fn begin_edit_switches_row_to_edit_mode() {
        let mut c = controller_with(3);
        assert!(c.begin_edit(&id(1)).is_some());

        let rows = c.page_rows();
        assert!(matches!(&rows[0], Row::Display { .. }));
        match &rows[1] {
            Row::Edit { fields, .. } => assert_eq!(fields[1], "edit"),
            other => panic!("expected edit row, got {:?}", other),
        }
    }

    #[test]
    fn begin_edit_unknown_id_is_silent_noop() {
        let mut c = controller_with(3);
        assert!(c.begin_edit(&id(99)).is_none());
        assert!(c.editing_id().is_none());
    }

    #[test]
    fn at_most_one_row_is_ever_editing() {
        let mut c = controller_with(3);
        c.begin_edit(&id(0));
        c.begin_edit(&id(2));

        assert_eq!(c.editing_id(), Some(&id(2)));
        let rows = c.page_rows();
        let editing = rows
            .iter()
            .filter(|r| matches!(r, Row::Edit { .. }))
            .count();
        assert_eq!(editing, 1);
        // Row A is back to its pre-edit rendered state
        assert_eq!(
            rows[0],
            Row::Display {
                id: id(0),
                cells: vec!["record 0".to_string(), "display".to_string()],
            }
        );
    }

    #[test]
    fn cancel_restores_exact_original_cells() {
        let mut c = controller_with(3);
        let before = c.page_rows();

        c.begin_edit(&id(1));
        let snapshot = c.edit_snapshot().unwrap().to_vec();
        assert!(c.cancel_edit(&id(1)));

        let after = c.page_rows();
        assert_eq!(before, after);
        match &after[1] {
            Row::Display { cells, .. } => assert_eq!(cells, &snapshot),
            other => panic!("expected display row, got {:?}", other),
        }
    }

    #[test]
    fn cancel_with_other_id_is_noop() {
        let mut c = controller_with(3);
        c.begin_edit(&id(1));
        assert!(!c.cancel_edit(&id(0)));
        assert_eq!(c.editing_id(), Some(&id(1)));
    }

    #[test]
    fn finish_edit_clears_the_session() {
        let mut c = controller_with(3);
        c.begin_edit(&id(1));
        assert!(c.finish_edit(&id(1)));
        assert!(c.editing_id().is_none());
    }

    #[test]
    fn refetch_destroys_active_edit_session() {
        let mut c = controller_with(3);
        c.begin_edit(&id(1));
        c.set_records((0..3).map(TestRow::new).collect(), "");
        assert!(c.editing_id().is_none());
    }

    #[test]
    fn fetch_error_renders_inline_error_row() {
        let mut c = controller_with(20);
        c.set_error("connection refused");

        let rows = c.page_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            Row::Notice("Error loading data: connection refused".to_string())
        );
        assert!(c.page_strip().is_none());

        // next successful fetch clears the error
        c.set_records((0..2).map(TestRow::new).collect(), "");
        assert_eq!(c.page_rows().len(), 2);
    }
}
