//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Session State of the Catalog Browser
//!
//! `AppState` joins the catalog store with the UI state and turns user intents
//! (type a search character, toggle sort, pick a filter, delete a record)
//! into store calls. The store re-runs its single query pipeline on each of
//! them; this type only keeps the selection consistent afterwards and flags
//! a redraw.
//!
//! A failed load is not fatal: the session starts with an empty catalog and a
//! visible error.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::catalog::filter::{self, FilterOption, SortMode};
use crate::catalog::loader::{self, LoadError};
use crate::catalog::predator::{Predator, PredatorId};
use crate::catalog::store::{CatalogQuery, CatalogStore};
use crate::config::Config;
use crate::model::ui_state::{UIOverlay, UIState};

pub struct AppState {
    pub config: Arc<Config>,
    pub store: CatalogStore,
    pub ui: UIState,
    /// Options shown by the filter menu, rebuilt each time it opens.
    pub menu_options: Vec<FilterOption>,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<PredatorId>,
    /// Record shown by the detail overlay.
    pub detail_id: Option<PredatorId>,
    pub last_error: Option<String>,
    pub last_status: Option<String>,
    pub redraw: bool,
}

impl AppState {
    pub fn new(config: Arc<Config>, mut store: CatalogStore) -> Self {
        store.sort_by(config.default_sort);

        let mut ui = UIState::new();
        ui.notification_ms = config.notification_ms;
        ui.clamp_selection(store.visible().len());

        Self {
            config,
            store,
            ui,
            menu_options: Vec::new(),
            pending_delete: None,
            detail_id: None,
            last_error: None,
            last_status: None,
            redraw: true,
        }
    }

    /// Loads the configured dataset (or the bundled one) and builds the session.
    pub async fn bootstrap(config: Arc<Config>) -> Self {
        let loaded = match &config.dataset_path {
            Some(path) => loader::load_file(path).await,
            None => loader::load(),
        };
        Self::from_load_result(config, loaded)
    }

    pub fn from_load_result(config: Arc<Config>, loaded: Result<Vec<Predator>, LoadError>) -> Self {
        match loaded {
            Ok(records) => {
                info!("Catalog loaded with {} records", records.len());
                Self::new(config, CatalogStore::from_records(records))
            }
            Err(e) => {
                error!("Catalog load failed: {}", e);
                let mut state = Self::new(config, CatalogStore::uninitialized());
                state.set_error(format!("Could not load catalog: {e}"));
                state.ui.show_error(format!("Could not load catalog: {e}"));
                state
            }
        }
    }

    #[must_use]
    pub fn query(&self) -> &CatalogQuery {
        self.store.query()
    }

    #[must_use]
    pub fn visible(&self) -> &[Predator] {
        self.store.visible()
    }

    #[must_use]
    pub fn selected_predator(&self) -> Option<&Predator> {
        self.ui.selected.and_then(|idx| self.visible().get(idx))
    }

    #[must_use]
    pub fn detail_predator(&self) -> Option<&Predator> {
        self.detail_id.and_then(|id| self.store.get(id))
    }

    #[must_use]
    pub fn pending_delete_predator(&self) -> Option<&Predator> {
        self.pending_delete.and_then(|id| self.store.get(id))
    }

    // --- Search ---

    pub fn set_search(&mut self, term: &str) {
        self.store.search(term);
        self.after_query_change();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.query().search.clone();
        term.push(c);
        self.set_search(&term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.query().search.clone();
        if term.pop().is_some() {
            self.set_search(&term);
        }
    }

    pub fn clear_search(&mut self) {
        if !self.query().search.is_empty() {
            self.set_search("");
        }
    }

    // --- Sort ---

    pub fn toggle_sort(&mut self) {
        let mode: SortMode = self.query().sort.toggled();
        self.store.sort_by(mode);
        self.set_status(format!("Sorted {}", mode.label()));
        self.after_query_change();
    }

    // --- Filter ---

    pub fn open_filter_menu(&mut self) {
        self.menu_options = filter::menu_options(&self.store.distinct_movies());
        let cursor = self
            .menu_options
            .iter()
            .position(|option| option == &self.store.query().filter)
            .unwrap_or(0);
        self.ui.menu_cursor = cursor;
        self.ui.set_overlay(UIOverlay::FilterMenu);
        self.redraw = true;
    }

    pub fn apply_menu_selection(&mut self) {
        if let Some(option) = self.menu_options.get(self.ui.menu_cursor).cloned() {
            self.select_filter(option);
        }
        self.ui.close_all_overlays();
        self.redraw = true;
    }

    pub fn select_filter(&mut self, option: FilterOption) {
        info!("Filter selected: {}", option);
        self.set_status(option.to_string());
        self.store.filter(option);
        self.after_query_change();
    }

    pub fn reset_filter(&mut self) {
        self.select_filter(FilterOption::default());
    }

    // --- Detail ---

    pub fn open_detail(&mut self) {
        if let Some(id) = self.selected_predator().map(|p| p.id) {
            self.detail_id = Some(id);
            self.ui.detail_scroll = 0;
            self.ui.set_overlay(UIOverlay::Detail);
            self.redraw = true;
        }
    }

    pub fn close_overlay(&mut self) {
        if self.ui.overlay == UIOverlay::Detail {
            self.detail_id = None;
        }
        if self.ui.overlay == UIOverlay::ConfirmDelete {
            self.pending_delete = None;
        }
        self.ui.close_all_overlays();
        self.redraw = true;
    }

    // --- Delete ---

    /// Asks for confirmation before deleting the focused record.
    pub fn request_delete(&mut self) {
        let target = match self.ui.overlay {
            UIOverlay::Detail => self.detail_id,
            _ => self.selected_predator().map(|p| p.id),
        };
        if let Some(id) = target {
            self.pending_delete = Some(id);
            self.ui.set_overlay(UIOverlay::ConfirmDelete);
            self.redraw = true;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            match self.store.delete(id) {
                Some(removed) => {
                    self.set_status(format!("Deleted {}", removed.name));
                    self.ui.show_success(format!("Deleted {}", removed.name));
                }
                None => warn!("Delete requested for missing predator {}", id),
            }
            if self.detail_id == Some(id) {
                self.detail_id = None;
            }
        }
        self.ui.close_all_overlays();
        self.after_query_change();
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.ui.set_overlay(if self.detail_id.is_some() {
            UIOverlay::Detail
        } else {
            UIOverlay::None
        });
        self.redraw = true;
    }

    // --- Messages ---

    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg_str = msg.into();
        error!("Setting error: {}", msg_str);
        self.last_error = Some(msg_str);
        self.redraw = true;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        let msg_str = msg.into();
        info!("Setting status: {}", msg_str);
        self.last_status = Some(msg_str);
        self.redraw = true;
    }

    /// Surfaces config problems found before the session existed. A load
    /// error keeps the notification slot; the warnings still reach the log.
    pub fn report_startup_warnings(&mut self, warnings: &[String]) {
        if warnings.is_empty() || self.ui.notification.is_some() {
            return;
        }
        self.ui.show_warning(warnings.join("\n"));
        self.redraw = true;
    }

    pub fn clear_msgs(&mut self) {
        self.last_error = None;
        self.last_status = None;
        self.redraw = true;
    }

    fn after_query_change(&mut self) {
        let len = self.visible().len();
        self.ui.clamp_selection(len);
        self.redraw = true;
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("records", &self.store.len())
            .field("visible", &self.store.visible().len())
            .field("query", self.store.query())
            .field("ui", &self.ui)
            .field("pending_delete", &self.pending_delete)
            .field("detail_id", &self.detail_id)
            .field("last_error", &self.last_error)
            .field("last_status", &self.last_status)
            .field("redraw", &self.redraw)
            .finish()
    }
}
