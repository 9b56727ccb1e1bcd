//! Data Transfer Objects
//!
//! Response bodies of the dashboard backend, deserialized from JSON.

use serde::{Deserialize, Serialize};

use crate::table::DataRecord;

// ============================================
// DASHBOARD DTOs
// ============================================

/// Aggregate counts from `GET /api/overview`
///
/// Every field may be missing; a missing count is shown as "N/A".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OverviewStats {
    #[serde(default)]
    pub total_users: Option<i64>,
    #[serde(default)]
    pub total_specialties: Option<i64>,
    #[serde(default)]
    pub total_states: Option<i64>,
    #[serde(default)]
    pub total_countries: Option<i64>,
    #[serde(default)]
    pub total_cities: Option<i64>,
}

/// One bar of the column-count chart
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnCount {
    pub column_name: String,
    pub total_rows: i64,
}

// ============================================
// TABLE DTOs
// ============================================

/// One page from `GET /api/data`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PageResponse {
    #[serde(default)]
    pub data: Option<Vec<DataRecord>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl PageResponse {
    /// Records of the page; missing data means an empty page
    pub fn records(self) -> Vec<DataRecord> {
        self.data.unwrap_or_default()
    }

    /// Page count; missing or zero is treated as a single page
    pub fn total_pages(&self) -> u32 {
        match self.total_pages {
            Some(0) | None => 1,
            Some(n) => n,
        }
    }
}

// ============================================
// UPLOAD DTOs
// ============================================

/// Body of `POST /api/upload`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_partial() {
        let stats: OverviewStats = serde_json::from_str(r#"{"total_users": 0}"#).unwrap();
        assert_eq!(stats.total_users, Some(0));
        assert_eq!(stats.total_cities, None);
    }

    #[test]
    fn test_page_defaults() {
        let page: PageResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert_eq!(page.total_pages(), 1);
        assert!(page.records().is_empty());

        let page: PageResponse = serde_json::from_str(r#"{"data": [], "total_pages": 0}"#).unwrap();
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_page_keeps_field_order() {
        let body = r#"{"data": [{"zeta": 1, "_id": "a", "alpha": null}], "total_pages": 3}"#;
        let page: PageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.total_pages(), 3);

        let records = page.records();
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["zeta", "_id", "alpha"]);
    }

    #[test]
    fn test_column_counts_order() {
        let body = r#"[{"column_name": "city", "total_rows": 9}, {"column_name": "state", "total_rows": 4}]"#;
        let counts: Vec<ColumnCount> = serde_json::from_str(body).unwrap();
        assert_eq!(counts[0].column_name, "city");
        assert_eq!(counts[1].total_rows, 4);
    }
}
