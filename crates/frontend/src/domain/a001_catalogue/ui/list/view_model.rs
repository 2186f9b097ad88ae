use super::row::CatalogueRow;
use super::state::{CatalogueListState, StatusFilter};
use crate::domain::a001_catalogue::api;
use crate::shared::components::message_box::MessageService;
use crate::shared::error::ApiError;
use contracts::domain::a001_catalogue::aggregate::{Catalogue, CatalogueId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Что открыто в форме справа от списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    New,
    Existing(CatalogueId),
}

impl FormTarget {
    pub fn id(&self) -> Option<CatalogueId> {
        match self {
            FormTarget::New => None,
            FormTarget::Existing(id) => Some(*id),
        }
    }
}

/// What became of a list or search response
#[derive(Debug, PartialEq)]
pub enum ResponseOutcome {
    Applied,
    /// A newer request or a user action superseded it
    Stale,
    Failed(ApiError),
}

/// Generations captured when a list request starts
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    load: u64,
    search: u64,
}

/// ViewModel for the catalogue list page
#[derive(Clone, Copy)]
pub struct CatalogueListViewModel {
    pub state: RwSignal<CatalogueListState>,
    /// Result of "search by id"; replaces the list while set
    pub search_result: RwSignal<Option<Catalogue>>,
    pub search_input: RwSignal<String>,
    pub form: RwSignal<Option<FormTarget>>,
    pending_loads: RwSignal<u32>,
    load_generation: StoredValue<u64>,
    search_generation: StoredValue<u64>,
    messages: MessageService,
}

impl CatalogueListViewModel {
    pub fn new(page_size: usize, messages: MessageService) -> Self {
        Self {
            state: RwSignal::new(CatalogueListState::new(page_size)),
            search_result: RwSignal::new(None),
            search_input: RwSignal::new(String::new()),
            form: RwSignal::new(None),
            pending_loads: RwSignal::new(0),
            load_generation: StoredValue::new(0),
            search_generation: StoredValue::new(0),
            messages,
        }
    }

    // ============================================================================
    // Commands
    // ============================================================================

    /// Fetch the full list. A failed request leaves the current list as is.
    pub fn reload(&self) {
        let vm = *self;
        let ticket = self.begin_load();
        spawn_local(async move {
            let result = api::fetch_all().await;
            if let ResponseOutcome::Failed(e) = vm.finish_load(ticket, result) {
                log::error!("Failed to load catalogues: {}", e);
                vm.messages.error("Error loading catalogues");
            }
        });
    }

    /// Start a list request. Searches already in flight are abandoned.
    pub fn begin_load(&self) -> LoadTicket {
        self.pending_loads.update(|n| *n += 1);
        LoadTicket {
            load: next_generation(self.load_generation),
            search: next_generation(self.search_generation),
        }
    }

    /// Apply a list response unless a newer list request was started.
    /// A search started after the request keeps its result on screen.
    pub fn finish_load(
        &self,
        ticket: LoadTicket,
        result: Result<Vec<Catalogue>, ApiError>,
    ) -> ResponseOutcome {
        self.pending_loads.update(|n| *n = n.saturating_sub(1));
        if self.load_generation.get_value() != ticket.load {
            log::debug!("Dropping superseded catalogue list response");
            return ResponseOutcome::Stale;
        }
        match result {
            Ok(records) => {
                log::debug!("Loaded {} catalogues", records.len());
                self.state.update(|s| s.load(records));
                if self.search_generation.get_value() == ticket.search {
                    self.search_result.set(None);
                }
                ResponseOutcome::Applied
            }
            Err(e) => ResponseOutcome::Failed(e),
        }
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        self.leave_search();
        self.state.update(|s| s.set_filter(filter));
    }

    pub fn next_page(&self) {
        self.state.update(|s| s.next_page());
    }

    pub fn previous_page(&self) {
        self.state.update(|s| s.previous_page());
    }

    /// Show a single catalogue found by the id typed into the search box.
    /// Empty or non-positive input is ignored.
    pub fn search_by_id(&self) {
        let input = self.search_input.get_untracked();
        let id = match CatalogueId::from_string(&input) {
            Ok(id) => id,
            Err(e) => {
                log::debug!("Search ignored: {}", e);
                return;
            }
        };

        let vm = *self;
        let ticket = self.begin_search();
        spawn_local(async move {
            let result = api::fetch_by_id(id).await;
            if let ResponseOutcome::Failed(e) = vm.finish_search(ticket, result) {
                if e.is_not_found() {
                    log::debug!("Catalogue {} does not exist", id);
                } else {
                    log::warn!("Catalogue {} lookup failed: {}", id, e);
                }
                vm.messages.error("Catalogue not found");
            }
        });
    }

    pub fn begin_search(&self) -> u64 {
        next_generation(self.search_generation)
    }

    /// Show the found record unless the user moved on since the search started
    pub fn finish_search(
        &self,
        ticket: u64,
        result: Result<Catalogue, ApiError>,
    ) -> ResponseOutcome {
        if self.search_generation.get_value() != ticket {
            log::debug!("Dropping superseded search response");
            return ResponseOutcome::Stale;
        }
        match result {
            Ok(catalogue) => {
                self.search_result.set(Some(catalogue));
                ResponseOutcome::Applied
            }
            Err(e) => ResponseOutcome::Failed(e),
        }
    }

    pub fn clear_search(&self) {
        self.search_input.set(String::new());
        self.leave_search();
    }

    fn leave_search(&self) {
        next_generation(self.search_generation);
        self.search_result.set(None);
    }

    pub fn delete(&self, id: CatalogueId) {
        let vm = *self;
        spawn_local(async move {
            match api::delete(id).await {
                Ok(body) => {
                    vm.messages
                        .success(body.text().unwrap_or("Catalogue deleted successfully"));
                    vm.reload();
                }
                Err(e) => {
                    log::error!("Failed to delete catalogue {}: {}", id, e);
                    vm.messages
                        .error(e.user_message("Unable to delete", "Delete request failed"));
                }
            }
        });
    }

    pub fn open_new(&self) {
        self.form.set(Some(FormTarget::New));
    }

    pub fn open_edit(&self, id: CatalogueId) {
        self.form.set(Some(FormTarget::Existing(id)));
    }

    pub fn close_form(&self) {
        self.form.set(None);
    }

    /// Called by the details form after a successful POST/PUT
    pub fn on_saved(&self, message: String) {
        self.messages.success(message);
        self.close_form();
        self.reload();
    }

    // ============================================================================
    // Derived view data
    // ============================================================================

    pub fn rows(&self) -> Vec<CatalogueRow> {
        if let Some(found) = self.search_result.get() {
            return vec![CatalogueRow::from(&found)];
        }
        self.state.with(|s| {
            s.visible_slice()
                .into_iter()
                .map(CatalogueRow::from)
                .collect()
        })
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads.get() > 0
    }

    pub fn is_searching(&self) -> bool {
        self.search_result.with(|r| r.is_some())
    }

    /// Pager is hidden while a filter or a search result is shown
    pub fn show_pagination(&self) -> bool {
        !self.is_searching() && self.state.with(|s| s.is_paginated())
    }

    pub fn is_filter_selected(&self, filter: StatusFilter) -> bool {
        !self.is_searching() && self.state.with(|s| s.active_filter() == filter)
    }

    pub fn page_label(&self) -> String {
        self.state.with(|s| s.page_label())
    }

    pub fn has_previous_page(&self) -> bool {
        self.state.with(|s| s.has_previous_page())
    }

    pub fn has_next_page(&self) -> bool {
        self.state.with(|s| s.has_next_page())
    }

    pub fn is_empty(&self) -> bool {
        !self.is_searching() && self.state.with(|s| s.filtered_count() == 0)
    }
}

fn next_generation(generation: StoredValue<u64>) -> u64 {
    generation.update_value(|g| *g += 1);
    generation.get_value()
}
