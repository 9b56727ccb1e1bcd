//! # csvdash
//!
//! Session-gated CSV dashboard. The heavy lifting (aggregation, CSV parsing,
//! persistence, pagination) happens in an external backend; this crate holds
//! the client-side decision logic shared by the browser app and the CLI.
//!
//! ## Modules
//!
//! - [`session`]: the single authentication flag and its transitions
//! - [`routes`]: route table and the public/protected guards
//! - [`dashboard`]: dashboard view-state (mode, side menu, files, stats, chart)
//! - [`table`]: paginated record table (column order, cells, page window)
//! - [`upload`]: CSV selection filter and upload outcomes
//! - [`api`]: wire types, errors and the [`Backend`] trait
//! - `config`: TOML/env configuration (native builds only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csvdash::api::HttpBackend;
//! use csvdash::table::RecordTable;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = HttpBackend::new("http://127.0.0.1:5000");
//!
//!     let mut table = RecordTable::default();
//!     if let Err(e) = table.load(&backend).await {
//!         eprintln!("{}", e);
//!         return;
//!     }
//!
//!     for row in table.rows() {
//!         println!("{}", row.join(" | "));
//!     }
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod dashboard;
pub mod routes;
pub mod session;
pub mod table;
pub mod upload;

pub use api::{
    ApiError, ApiResult, Backend, ColumnCount, OverviewStats, PageResponse, UploadResponse,
    DEFAULT_API_BASE,
};

#[cfg(feature = "native")]
pub use api::HttpBackend;

#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};

pub use dashboard::{DashboardState, Load, StatCard, ViewMode};
pub use routes::{resolve, Access, Guard, GuardDecision, ProtectedGuard, PublicGuard, Resolution, Route};
pub use session::{AuthAction, AuthState, Session, SessionFlag, SubscriptionId};
pub use table::{DataRecord, PageWindow, RecordTable, PAGE_SIZE};
pub use upload::{filter_csv, upload_file, SelectedFile, SelectionError, UploadOutcome, UploadedFile};
