//! Paginated Record Table
//!
//! One page of backend records at a time. Columns come from the first
//! record of the current page, with `_id` pinned in front.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::api::{ApiResult, Backend, PageResponse};

/// Records per page
pub const PAGE_SIZE: u32 = 5;

/// Page-number buttons shown at once
pub const WINDOW_WIDTH: u32 = 5;

/// Field that always leads the column order
pub const ID_FIELD: &str = "_id";

/// Text shown for a `null` cell
pub const NULL_CELL: &str = "N/A";

/// A backend record: field name to value, in payload order
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DataRecord(IndexMap<String, Value>);

impl DataRecord {
    pub fn new(fields: IndexMap<String, Value>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Keys in payload order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `_id` first, then the remaining keys in payload order
    pub fn ordered_keys(&self) -> Vec<&str> {
        std::iter::once(ID_FIELD)
            .chain(self.keys().filter(|k| *k != ID_FIELD))
            .collect()
    }

    /// Display text of one cell
    pub fn cell(&self, key: &str) -> Cow<'_, str> {
        cell_text(self.get(key))
    }

    /// Cells in [`ordered_keys`](Self::ordered_keys) order
    pub fn cells(&self) -> Vec<String> {
        self.ordered_keys()
            .into_iter()
            .map(|key| self.cell(key).into_owned())
            .collect()
    }
}

impl From<IndexMap<String, Value>> for DataRecord {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self(fields)
    }
}

/// `null` renders as "N/A"; every other value as-is. A missing key is blank.
pub fn cell_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None => Cow::Borrowed(""),
        Some(Value::Null) => Cow::Borrowed(NULL_CELL),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Column heading for a field name
pub fn header_label(key: &str) -> String {
    key.replace('_', " ")
}

/// The visible run of page-number buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
}

impl PageWindow {
    /// Window of [`WINDOW_WIDTH`] pages around `current`, clamped to `[1, total]`
    pub fn around(current: u32, total: u32) -> Self {
        let start = current.saturating_sub(WINDOW_WIDTH / 2).max(1);
        let end = total.min(start.saturating_add(WINDOW_WIDTH - 1));
        Self { start, end }
    }

    /// Page numbers in the window; empty when `end < start`
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// Parameters of one page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

/// Table view state
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    current_page: u32,
    total_pages: u32,
    records: Vec<DataRecord>,
    loading: bool,
    page_size: u32,
    previous_column_count: usize,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl RecordTable {
    /// A page size of zero falls back to [`PAGE_SIZE`]
    pub fn new(page_size: u32) -> Self {
        let page_size = if page_size == 0 { PAGE_SIZE } else { page_size };
        Self {
            current_page: 1,
            total_pages: 1,
            records: Vec::new(),
            loading: false,
            page_size,
            previous_column_count: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn records(&self) -> &[DataRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Move to `page` if it lies in `[1, total_pages]`.
    ///
    /// Returns whether the current page changed; only then is a fetch due.
    pub fn paginate(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages {
            tracing::debug!(page, total = self.total_pages, "ignoring out-of-range page");
            return false;
        }
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn previous(&mut self) -> bool {
        self.paginate(self.current_page.saturating_sub(1))
    }

    pub fn next(&mut self) -> bool {
        self.paginate(self.current_page.saturating_add(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page != 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page != self.total_pages
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::around(self.current_page, self.total_pages)
    }

    /// Mark the current page as in flight
    pub fn begin_load(&mut self) -> PageRequest {
        self.loading = true;
        PageRequest {
            page: self.current_page,
            limit: self.page_size,
        }
    }

    /// Settle a fetch. Failures are logged and leave the records untouched.
    ///
    /// Responses are applied in arrival order, so a slow response for an
    /// older page can overwrite a newer one.
    pub fn apply_page(&mut self, result: ApiResult<PageResponse>) {
        self.loading = false;

        match result {
            Ok(response) => {
                self.previous_column_count = self.records.first().map_or(0, DataRecord::len);
                self.total_pages = response.total_pages();
                self.records = response.records();
                tracing::debug!(
                    page = self.current_page,
                    total = self.total_pages,
                    records = self.records.len(),
                    "page loaded"
                );
            }
            Err(e) => {
                tracing::warn!(page = self.current_page, error = %e, "page fetch failed");
            }
        }
    }

    /// Fetch the current page through `backend`.
    ///
    /// The result is applied as in [`apply_page`](Self::apply_page); the
    /// error is also handed back so callers can stop on it.
    pub async fn load<B: Backend>(&mut self, backend: &B) -> ApiResult<()> {
        let request = self.begin_load();
        let result = backend.page(request.page, request.limit).await;
        let status = match &result {
            Ok(_) => Ok(()),
            Err(e) => Err(e.clone()),
        };
        self.apply_page(result);
        status
    }

    /// Column keys, taken from the first record only.
    ///
    /// Fields that appear only on later records of the page get no column.
    pub fn columns(&self) -> Vec<&str> {
        self.records
            .first()
            .map(DataRecord::ordered_keys)
            .unwrap_or_default()
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns().into_iter().map(header_label).collect()
    }

    /// One row of cell text per record, each in its own key order
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(DataRecord::cells).collect()
    }

    /// Span of the "No records found" row
    pub fn empty_colspan(&self) -> usize {
        self.previous_column_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str) -> DataRecord {
        serde_json::from_str(body).unwrap()
    }

    fn page(records: &[&str], total_pages: u32) -> ApiResult<PageResponse> {
        Ok(PageResponse {
            data: Some(records.iter().map(|r| record(r)).collect()),
            total_pages: Some(total_pages),
        })
    }

    #[test]
    fn test_ordered_keys_pin_id() {
        let rec = record(r#"{"_id": "a", "z": 1, "a": null}"#);
        assert_eq!(rec.ordered_keys(), vec!["_id", "z", "a"]);

        let rec = record(r#"{"z": 1, "a": null, "_id": "b"}"#);
        assert_eq!(rec.ordered_keys(), vec!["_id", "z", "a"]);
    }

    #[test]
    fn test_cells() {
        let rec = record(r#"{"_id": "a", "z": 1, "a": null, "e": "", "n": 0}"#);
        assert_eq!(rec.cell("a"), "N/A");
        assert_eq!(rec.cell("z"), "1");
        assert_eq!(rec.cell("e"), "");
        assert_eq!(rec.cell("n"), "0");
        assert_eq!(rec.cells(), vec!["a", "1", "N/A", "", "0"]);
        assert_eq!(rec.id(), Some("a"));
    }

    #[test]
    fn test_missing_id_leaves_blank_cell() {
        let rec = record(r#"{"name": "Ada"}"#);
        assert_eq!(rec.ordered_keys(), vec!["_id", "name"]);
        assert_eq!(rec.cells(), vec!["", "Ada"]);
    }

    #[test]
    fn test_header_label() {
        assert_eq!(header_label("first_name"), "first name");
        assert_eq!(header_label("_id"), " id");
    }

    #[test]
    fn test_page_window() {
        let pages = |current, total| PageWindow::around(current, total).pages().collect::<Vec<_>>();

        assert_eq!(pages(7, 12), vec![5, 6, 7, 8, 9]);
        assert_eq!(pages(1, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(pages(2, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(pages(12, 12), vec![10, 11, 12]);
        assert_eq!(pages(1, 3), vec![1, 2, 3]);
        assert_eq!(pages(1, 1), vec![1]);
    }

    #[test]
    fn test_prev_next_enabled() {
        let mut table = RecordTable::default();
        table.apply_page(page(&[r#"{"_id": "a"}"#], 4));

        assert!(!table.has_previous());
        assert!(table.has_next());

        assert!(table.paginate(2));
        assert!(table.has_previous());
        assert!(table.has_next());

        assert!(table.paginate(4));
        assert!(table.has_previous());
        assert!(!table.has_next());
    }

    #[test]
    fn test_paginate_out_of_range_is_noop() {
        let mut table = RecordTable::default();
        table.apply_page(page(&[r#"{"_id": "a"}"#], 3));

        assert!(!table.paginate(0));
        assert!(!table.paginate(4));
        assert!(!table.previous());
        assert_eq!(table.current_page(), 1);

        assert!(table.next());
        assert_eq!(table.current_page(), 2);
    }

    #[test]
    fn test_page_window_near_u32_max() {
        let window = PageWindow::around(u32::MAX, u32::MAX);
        assert_eq!(window.start, u32::MAX - 2);
        assert_eq!(window.end, u32::MAX);
        assert_eq!(window.pages().count(), 3);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        assert_eq!(RecordTable::new(0).page_size(), PAGE_SIZE);
        assert_eq!(RecordTable::new(0).begin_load().limit, 5);
        assert_eq!(RecordTable::new(20).page_size(), 20);
    }

    #[test]
    fn test_same_page_does_not_refetch() {
        let mut table = RecordTable::default();
        table.apply_page(page(&[r#"{"_id": "a"}"#], 3));
        assert!(!table.paginate(1));
    }

    #[test]
    fn test_loading_flag() {
        let mut table = RecordTable::default();
        let request = table.begin_load();
        assert_eq!(request, PageRequest { page: 1, limit: 5 });
        assert!(table.is_loading());

        table.apply_page(Err(crate::api::ApiError::Network("down".into())));
        assert!(!table.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_records() {
        let mut table = RecordTable::default();
        table.apply_page(page(&[r#"{"_id": "a", "x": 1}"#], 2));
        table.apply_page(Err(crate::api::ApiError::Network("down".into())));

        assert_eq!(table.records().len(), 1);
        assert_eq!(table.total_pages(), 2);
    }

    #[test]
    fn test_columns_from_first_record_only() {
        let mut table = RecordTable::default();
        table.apply_page(page(
            &[
                r#"{"_id": "a", "name": "Ada"}"#,
                r#"{"_id": "b", "name": "Bo", "city": "Oslo"}"#,
            ],
            1,
        ));

        assert_eq!(table.columns(), vec!["_id", "name"]);
        assert_eq!(table.headers(), vec![" id", "name"]);
        assert_eq!(table.rows()[1], vec!["b", "Bo", "Oslo"]);
    }

    #[test]
    fn test_empty_page_colspan() {
        let mut table = RecordTable::default();
        table.apply_page(page(&[], 1));
        assert_eq!(table.empty_colspan(), 0);

        table.apply_page(page(&[r#"{"_id": "a", "x": 1, "y": 2}"#], 2));
        table.apply_page(page(&[], 2));
        assert!(table.columns().is_empty());
        assert_eq!(table.empty_colspan(), 3);
    }
}
