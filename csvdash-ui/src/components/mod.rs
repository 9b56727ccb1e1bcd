//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod card;
pub mod chart;
pub mod loading;
pub mod record_table;
pub mod side_menu;

pub use card::OverviewCard;
pub use chart::ColumnChart;
pub use loading::Loading;
pub use record_table::RecordTableView;
pub use side_menu::SideMenu;
