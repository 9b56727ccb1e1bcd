//! Dashboard View State
//!
//! Mode switching, side menu, uploaded files, and the two best-effort
//! fetches (overview stats and column counts) that back the overview.

use crate::api::{ApiResult, Backend, ColumnCount, OverviewStats};
use crate::session::Session;
use crate::upload::{filter_csv, SelectedFile, SelectionError};

/// Text shown in place of an absent count
pub const MISSING_VALUE: &str = "N/A";

/// Dashboard sub-view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Overview,
    RecordTable,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Overview => "Dashboard",
            ViewMode::RecordTable => "Records",
        }
    }
}

/// A slot filled by a best-effort fetch
///
/// There is no failed state: a failed fetch leaves the slot pending, so the
/// loading indicator stays up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load<T> {
    Pending,
    Ready(T),
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Load::Pending
    }
}

impl<T> Load<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(value) => Some(value),
            Load::Pending => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Load::Pending)
    }

    /// Replace the value on success; log and keep the slot on failure
    fn settle(&mut self, what: &str, result: ApiResult<T>) {
        match result {
            Ok(value) => *self = Load::Ready(value),
            Err(e) => tracing::warn!(fetch = what, error = %e, "fetch failed"),
        }
    }
}

/// One overview card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: Option<i64>,
}

impl StatCard {
    /// The count, or "N/A" when the backend left it out. Zero stays "0".
    pub fn display_value(&self) -> String {
        self.value
            .map(|v| v.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }
}

/// Cards in display order
pub fn stat_cards(stats: &OverviewStats) -> [StatCard; 5] {
    [
        StatCard {
            title: "Number of Accounts",
            value: stats.total_users,
        },
        StatCard {
            title: "Specialty",
            value: stats.total_specialties,
        },
        StatCard {
            title: "Number of Cities",
            value: stats.total_cities,
        },
        StatCard {
            title: "Number of States",
            value: stats.total_states,
        },
        StatCard {
            title: "Number of Countries",
            value: stats.total_countries,
        },
    ]
}

/// Dashboard state, generic over the file handle the picker produces
#[derive(Debug, Clone)]
pub struct DashboardState<F> {
    mode: ViewMode,
    menu_open: bool,
    files: Vec<F>,
    overview: Load<OverviewStats>,
    column_counts: Load<Vec<ColumnCount>>,
}

impl<F> Default for DashboardState<F> {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            menu_open: false,
            files: Vec::new(),
            overview: Load::Pending,
            column_counts: Load::Pending,
        }
    }
}

impl<F: SelectedFile + Clone> DashboardState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Files accepted so far, oldest first
    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn overview(&self) -> &Load<OverviewStats> {
        &self.overview
    }

    pub fn column_counts(&self) -> &Load<Vec<ColumnCount>> {
        &self.column_counts
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Switch sub-view from the side menu
    pub fn select_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.menu_open = false;
    }

    /// Filter a picker selection and remember the accepted files.
    ///
    /// The caller uploads every returned file, one request each. Files are
    /// kept whatever their upload outcome.
    pub fn accept_selection(&mut self, selection: Vec<F>) -> Result<Vec<F>, SelectionError> {
        let accepted = filter_csv(selection)?;
        self.files.extend(accepted.iter().cloned());
        tracing::info!(accepted = accepted.len(), total = self.files.len(), "files selected");
        Ok(accepted)
    }

    /// Clicking a remembered file: re-upload it and show the record table.
    ///
    /// Returns the file to upload, or `None` for an unknown index.
    pub fn reupload_and_switch_view(&mut self, index: usize) -> Option<F> {
        let file = self.files.get(index)?.clone();
        self.mode = ViewMode::RecordTable;
        self.menu_open = false;
        tracing::info!(file = %file.name(), "re-uploading");
        Some(file)
    }

    pub fn logout(&mut self, session: &Session) {
        session.logout();
        self.menu_open = false;
    }

    pub fn apply_overview(&mut self, result: ApiResult<OverviewStats>) {
        self.overview.settle("overview", result);
    }

    pub fn apply_column_counts(&mut self, result: ApiResult<Vec<ColumnCount>>) {
        self.column_counts.settle("column_counts", result);
    }

    /// Overview cards, or `None` while the stats are still loading
    pub fn stat_cards(&self) -> Option<[StatCard; 5]> {
        self.overview.ready().map(stat_cards)
    }

    /// Fetch both overview slots concurrently
    pub async fn refresh<B: Backend>(&mut self, backend: &B) {
        let (overview, counts) =
            futures_util::future::join(backend.overview(), backend.column_counts()).await;
        self.apply_overview(overview);
        self.apply_column_counts(counts);
    }
}
