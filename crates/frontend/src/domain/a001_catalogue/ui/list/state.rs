//! Catalogue list state: status filter + client-side pagination.
//!
//! Pure and synchronous. The reactive wrapper in `view_model.rs` owns one
//! instance inside a signal and the view only reads from it.

use contracts::domain::a001_catalogue::aggregate::{Catalogue, CatalogueStatus};
use contracts::domain::common::AggregateRoot;
use std::cmp::Reverse;

/// Page size used when the configuration does not say otherwise
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Фильтр списка по статусу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Inactive,
    ];

    pub fn matches(&self, status: CatalogueStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == CatalogueStatus::Active,
            StatusFilter::Inactive => status == CatalogueStatus::Inactive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }
}

#[derive(Clone, Debug)]
pub struct CatalogueListState {
    records: Vec<Catalogue>,
    filter: StatusFilter,
    // 1-based
    page: usize,
    page_size: usize,
}

impl Default for CatalogueListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogueListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filter: StatusFilter::All,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the whole list, newest (highest id) first, and go back to page 1.
    pub fn load(&mut self, mut records: Vec<Catalogue>) {
        records.sort_by_key(|c| Reverse(c.id()));
        self.records = records;
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.page -= 1;
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.is_paginated() && self.page < self.page_count()
    }

    pub fn has_previous_page(&self) -> bool {
        self.is_paginated() && self.page > 1
    }

    /// Records shown right now.
    ///
    /// Only the unfiltered list is paged; a status filter shows every match
    /// on a single screen.
    pub fn visible_slice(&self) -> Vec<&Catalogue> {
        let filtered = self.filtered();
        if !self.is_paginated() {
            return filtered;
        }
        let start = (self.page - 1) * self.page_size;
        filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// `ceil(filtered / page_size)`, never less than 1
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size).max(1)
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count())
    }

    pub fn is_paginated(&self) -> bool {
        self.filter == StatusFilter::All
    }

    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|c| self.filter.matches(c.status))
            .count()
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn active_filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn records(&self) -> &[Catalogue] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn filtered(&self) -> Vec<&Catalogue> {
        self.records
            .iter()
            .filter(|c| self.filter.matches(c.status))
            .collect()
    }
}
