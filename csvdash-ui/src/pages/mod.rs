//! Pages
//!
//! Top-level route components.

pub mod dashboard;
pub mod login;
pub mod signup;

pub use dashboard::Dashboard;
pub use login::Login;
pub use signup::Signup;
