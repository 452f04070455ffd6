use super::facet::FacetKind;
use super::navigator::Navigator;
use super::page::PageNumber;
use super::query::{QueryState, MAX_CATEGORY_DEPTH, RESERVED_KEYS, SEARCH_PATH};

/// Действия над состоянием фильтров.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    ToggleFacet {
        key: String,
        value: String,
        kind: FacetKind,
    },
    /// Replaces the category path (`/search/{grandparent}/{parent}/{child}`).
    SelectCategory { path: Vec<String> },
    SetSort(String),
    SetPage(u32),
    SetSearch(String),
    ClearAll,
}

/// Как записывать новое состояние в историю.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

impl QueryAction {
    pub fn toggle(key: impl Into<String>, value: impl Into<String>, kind: FacetKind) -> Self {
        Self::ToggleFacet {
            key: key.into(),
            value: value.into(),
            kind,
        }
    }

    /// Ввод в строку поиска не засоряет историю.
    pub fn history_mode(&self) -> HistoryMode {
        match self {
            Self::SetSearch(_) => HistoryMode::Replace,
            _ => HistoryMode::Push,
        }
    }
}

/// Чистый редьюсер. Любое действие, кроме `SetPage`, сбрасывает страницу.
pub fn reduce(state: &QueryState, action: QueryAction) -> QueryState {
    let mut next = state.clone();
    match action {
        QueryAction::ToggleFacet { key, value, kind } => {
            // page/sort/q управляются своими действиями
            if RESERVED_KEYS.contains(&key.as_str()) {
                log::warn!("ignoring facet toggle on reserved key '{}'", key);
                return next;
            }
            match kind {
                FacetKind::Multi => next.filters.toggle(&key, &value),
                FacetKind::Single => next.filters.replace(&key, &value),
            }
            next.page = None;
        }
        QueryAction::SelectCategory { path } => {
            next.base_path = SEARCH_PATH.to_string();
            next.category_path = path
                .into_iter()
                .filter(|s| !s.is_empty())
                .take(MAX_CATEGORY_DEPTH)
                .collect();
            next.page = None;
        }
        QueryAction::SetSort(sort) => {
            next.sort = Some(sort).filter(|s| !s.is_empty());
            next.page = None;
        }
        QueryAction::SetSearch(q) => {
            next.q = Some(q).filter(|s| !s.is_empty());
            next.page = None;
        }
        QueryAction::SetPage(page) => {
            next.page = Some(PageNumber::saturating(page));
        }
        QueryAction::ClearAll => {
            next.filters.clear();
            next.category_path.clear();
            next.page = None;
        }
    }
    next
}

/// Применяет действие к последнему зафиксированному состоянию и пишет проекцию в URL.
///
/// `current` must be the committed state (not a snapshot captured before an earlier
/// navigation), so rapid consecutive actions compose instead of overwriting each other.
pub fn apply<N: Navigator + ?Sized>(
    navigator: &N,
    current: &QueryState,
    action: QueryAction,
) -> QueryState {
    let mode = action.history_mode();
    log::debug!("query action: {:?}", action);
    let next = reduce(current, action);
    let url = next.to_url();
    if url != current.to_url() {
        match mode {
            HistoryMode::Push => navigator.push(&url),
            HistoryMode::Replace => navigator.replace(&url),
        }
        log::debug!("query state -> {}", url);
    }
    next
}

/// Хранилище состояния поверх навигатора: редьюсер — источник истины,
/// URL — проекция. `sync_from_location` вызывается на back/forward.
pub struct QueryStore<N: Navigator> {
    navigator: N,
    state: QueryState,
}

impl<N: Navigator> QueryStore<N> {
    pub fn new(navigator: N) -> Self {
        let state = QueryState::from_url(&navigator.current_path(), &navigator.current_query());
        Self { navigator, state }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn dispatch(&mut self, action: QueryAction) -> &QueryState {
        self.state = apply(&self.navigator, &self.state, action);
        &self.state
    }

    pub fn sync_from_location(&mut self) -> &QueryState {
        self.state = QueryState::from_url(
            &self.navigator.current_path(),
            &self.navigator.current_query(),
        );
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_state::MemoryNavigator;

    fn state(url: &str) -> QueryState {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        QueryState::from_url(path, query)
    }

    #[test]
    fn test_multi_toggle_scenario() {
        let s = state("/search?color=red");
        let s = reduce(&s, QueryAction::toggle("color", "blue", FacetKind::Multi));
        assert_eq!(s.to_url(), "/search?color=red,blue");
        let s = reduce(&s, QueryAction::toggle("color", "red", FacetKind::Multi));
        assert_eq!(s.to_url(), "/search?color=blue");
    }

    #[test]
    fn test_toggle_and_sort_clear_page() {
        let s = state("/search?page=4&color=red");
        let toggled = reduce(&s, QueryAction::toggle("size", "m", FacetKind::Multi));
        assert_eq!(toggled.page, None);
        let sorted = reduce(&s, QueryAction::SetSort("price_desc".into()));
        assert_eq!(sorted.page, None);
        assert_eq!(sorted.to_url(), "/search?color=red&sort=price_desc");
    }

    #[test]
    fn test_set_page_keeps_other_params() {
        let s = state("/search/fashion?q=bag&brand=acme&sort=rating");
        let paged = reduce(&s, QueryAction::SetPage(3));
        assert_eq!(paged.to_url(), "/search/fashion?q=bag&brand=acme&sort=rating&page=3");
        let zero = reduce(&s, QueryAction::SetPage(0));
        assert_eq!(zero.current_page().get(), 1);
    }

    #[test]
    fn test_select_category_carries_query_and_clears_page() {
        let s = state("/search/fashion?color=red&page=2");
        let next = reduce(
            &s,
            QueryAction::SelectCategory {
                path: vec!["electronics".into(), "audio".into(), "headphones".into(), "extra".into()],
            },
        );
        assert_eq!(next.to_url(), "/search/electronics/audio/headphones?color=red");
    }

    #[test]
    fn test_toggle_on_reserved_key_is_ignored() {
        let s = state("/search?color=red&sort=rating&page=3");
        for key in RESERVED_KEYS {
            for kind in [FacetKind::Multi, FacetKind::Single] {
                let next = reduce(&s, QueryAction::toggle(key, "price_asc", kind));
                assert_eq!(next, s);
                assert_eq!(next.filters.get(key), None);
            }
        }
        let url = s.to_url();
        assert_eq!(url, "/search?color=red&sort=rating&page=3");
        assert_eq!(state(&url), s);
    }

    #[test]
    fn test_clear_all_keeps_q_and_sort() {
        let s = state("/search/fashion/men?q=shirt&color=red&size=m&sort=newest&page=5");
        let cleared = reduce(&s, QueryAction::ClearAll);
        assert_eq!(cleared.to_url(), "/search?q=shirt&sort=newest");
    }

    #[test]
    fn test_single_select_facet() {
        let s = state("/search?brand=acme");
        let other = reduce(&s, QueryAction::toggle("brand", "zen", FacetKind::Single));
        assert_eq!(other.to_url(), "/search?brand=zen");
        let off = reduce(&other, QueryAction::toggle("brand", "zen", FacetKind::Single));
        assert_eq!(off.to_url(), "/search");
    }

    #[test]
    fn test_store_composes_rapid_actions() {
        let mut store = QueryStore::new(MemoryNavigator::new("/search?page=2"));
        store.dispatch(QueryAction::toggle("color", "red", FacetKind::Multi));
        store.dispatch(QueryAction::toggle("color", "blue", FacetKind::Multi));
        assert_eq!(store.navigator().current_url(), "/search?color=red,blue");
        assert_eq!(store.navigator().history_len(), 3);
    }

    #[test]
    fn test_search_input_replaces_history_entry() {
        let mut store = QueryStore::new(MemoryNavigator::new("/search"));
        store.dispatch(QueryAction::SetSearch("lamp".into()));
        assert_eq!(store.navigator().history_len(), 1);
        assert_eq!(store.navigator().current_url(), "/search?q=lamp");
    }

    #[test]
    fn test_store_syncs_on_back() {
        let mut store = QueryStore::new(MemoryNavigator::new("/search"));
        store.dispatch(QueryAction::SetPage(2));
        store.dispatch(QueryAction::SetPage(3));
        assert!(store.navigator().back());
        assert_eq!(store.sync_from_location().current_page().get(), 2);
    }

    #[test]
    fn test_noop_action_does_not_touch_history() {
        let mut store = QueryStore::new(MemoryNavigator::new("/search?q=a"));
        store.dispatch(QueryAction::ClearAll);
        assert_eq!(store.navigator().history_len(), 1);
    }
}
