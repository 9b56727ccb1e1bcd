//! State Management
//!
//! The app-wide session handle, bridged into Leptos signals.

pub mod session;

pub use session::{provide_session, SessionContext};
