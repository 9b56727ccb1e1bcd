//! Dashboard Backend API
//!
//! Wire types and the [`Backend`] trait the views fetch through.
//!
//! # Endpoints
//!
//! - `GET /api/overview` - Aggregate counts
//! - `GET /api/column_counts` - Rows per column, for the bar chart
//! - `GET /api/data?page=<n>&limit=<n>` - One page of records
//! - `POST /api/upload` - Multipart CSV upload, field `file`
//!
//! No timeouts, no retries: a failed call is reported once and left alone.

pub mod dto;
pub mod error;
#[cfg(feature = "native")]
pub mod http;

pub use dto::{ColumnCount, OverviewStats, PageResponse, UploadResponse};
pub use error::{ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::HttpBackend;

use async_trait::async_trait;

use crate::upload::SelectedFile;

/// Backend base address used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Dashboard backend
///
/// Futures are not required to be `Send`: the browser runs everything on one
/// thread.
#[async_trait(?Send)]
pub trait Backend {
    /// File handle accepted by [`Backend::upload`]
    type File: SelectedFile;

    async fn overview(&self) -> ApiResult<OverviewStats>;

    async fn column_counts(&self) -> ApiResult<Vec<ColumnCount>>;

    async fn page(&self, page: u32, limit: u32) -> ApiResult<PageResponse>;

    /// Upload one file.
    ///
    /// A non-success status maps to [`ApiError::Status`] carrying the
    /// backend's `error` text; an undecodable body to [`ApiError::Decode`].
    async fn upload(&self, file: &Self::File) -> ApiResult<()>;
}

/// Build an endpoint URL from a base address
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Status error from a decoded upload body
pub fn upload_status_error(status: u16, body: UploadResponse) -> ApiError {
    ApiError::Status {
        status,
        message: body.error.unwrap_or_else(|| "Unknown error".to_string()),
    }
}
