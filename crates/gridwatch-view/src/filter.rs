//! Search and status filtering.
//!
//! A pure state container: `visible_targets` is a function of its inputs
//! only, so filtering by status and by search text compose independently.

use serde::{Deserialize, Serialize};

use gridwatch_core::enums::StatusFilter;
use gridwatch_core::state::TargetRecord;

/// Operator-entered filter state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    search_text: String,
    status_filter: StatusFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// The subset of records passing both filters, in input order.
    ///
    /// A record is visible when its status is admitted AND the search text
    /// is empty or a case-insensitive substring of its id or name.
    pub fn visible_targets<'a>(&self, records: &'a [TargetRecord]) -> Vec<&'a TargetRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Whether a single record passes both filters.
    pub fn matches(&self, record: &TargetRecord) -> bool {
        if !self.status_filter.admits(record.status) {
            return false;
        }
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record.id.to_lowercase().contains(&needle)
            || record.name.to_lowercase().contains(&needle)
    }
}
