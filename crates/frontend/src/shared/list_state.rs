//! Filter/paging UI state shared by the entity list pages, persisted to
//! `localStorage` under a per-page versioned key.

use contracts::shared::pagination::ListQuery;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedState {
    pub search: String,
    pub active_only: bool,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Clone, Debug)]
pub struct ListUiState {
    // Filters
    pub search: String,
    pub active_only: bool,

    // Pagination
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,

    // Load flag
    pub is_loaded: bool,
}

impl Default for ListUiState {
    fn default() -> Self {
        Self {
            search: String::new(),
            active_only: false,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
            is_loaded: false,
        }
    }
}

impl ListUiState {
    /// Query parameters for the list endpoint
    pub fn to_query(&self) -> ListQuery {
        ListQuery::new(self.page, self.page_size)
            .with_active_only(self.active_only)
            .with_search(&self.search)
    }

    /// Number of filters shown in the filter-panel badge
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if self.active_only {
            count += 1;
        }
        count
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted(key: &str) -> Option<PersistedState> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(key: &str, st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else { return };
    let _ = storage.set_item(key, &raw);
}

pub fn persist_state(key: &str, signal: RwSignal<ListUiState>) {
    let st = signal.get_untracked();
    let persisted = PersistedState {
        search: st.search,
        active_only: st.active_only,
        page: st.page,
        page_size: st.page_size,
    };
    save_persisted(key, &persisted);
}

pub fn create_state(key: &str) -> RwSignal<ListUiState> {
    let mut st = ListUiState::default();
    if let Some(p) = load_persisted(key) {
        st.search = p.search;
        st.active_only = p.active_only;
        st.page = p.page;
        st.page_size = p.page_size;
    }
    RwSignal::new(st)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_query_maps_filters() {
        let st = ListUiState {
            search: " tea ".into(),
            active_only: true,
            page: 3,
            page_size: 25,
            ..Default::default()
        };
        let q = st.to_query();
        assert_eq!(q.page, 3);
        assert_eq!(q.page_size, 25);
        assert_eq!(q.active_only, Some(true));
        assert_eq!(q.search.as_deref(), Some("tea"));
    }

    #[test]
    fn filter_count_ignores_blank_search() {
        let mut st = ListUiState::default();
        assert_eq!(st.active_filter_count(), 0);
        st.search = "   ".into();
        assert_eq!(st.active_filter_count(), 0);
        st.search = "tea".into();
        st.active_only = true;
        assert_eq!(st.active_filter_count(), 2);
    }
}
