//! API Layer
//!
//! Browser implementation of the dashboard backend.

pub mod client;

pub use client::{BrowserBackend, BrowserFile};
