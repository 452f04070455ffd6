//! Привязка `QueryState` к адресной строке браузера.
//!
//! Состояние хранится в сигнале и меняется только через `dispatch`
//! (редьюсер из `contracts`), после чего проекция пишется в history.
//! Внешние изменения URL (back/forward, ссылки) перечитываются эффектом.

use crate::layout::global_context::use_global_context;
use crate::shared::navigator::BrowserNavigator;
use contracts::shared::query_state::{
    apply, split_url, FacetKind, FilterMap, QueryAction, QueryState,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct QueryStateHandle {
    state: RwSignal<QueryState>,
    /// Зеркало номера страницы: обновляется сразу, до записи URL.
    current_page: RwSignal<u32>,
    navigator: BrowserNavigator,
}

impl QueryStateHandle {
    pub fn state(&self) -> QueryState {
        self.state.get()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&QueryState) -> R) -> R {
        self.state.with(f)
    }

    pub fn filters(&self) -> FilterMap {
        self.state.with(|s| s.filters.clone())
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.state.with(|s| s.filters.contains(key, value))
    }

    pub fn sort(&self, default: &str) -> String {
        self.state.with(|s| s.current_sort(default).to_string())
    }

    pub fn q(&self) -> String {
        self.state.with(|s| s.q.clone().unwrap_or_default())
    }

    pub fn category_path(&self) -> Vec<String> {
        self.state.with(|s| s.category_path.clone())
    }

    pub fn page(&self) -> u32 {
        self.current_page.get()
    }

    pub fn dispatch(&self, action: QueryAction) {
        let next = self
            .state
            .with_untracked(|current| apply(&self.navigator, current, action));
        self.current_page.set(next.current_page().get());
        self.state.set(next);
    }

    pub fn toggle_facet(&self, key: &str, value: &str, kind: FacetKind) {
        self.dispatch(QueryAction::toggle(key, value, kind));
    }

    pub fn select_category(&self, path: Vec<String>) {
        self.dispatch(QueryAction::SelectCategory { path });
    }

    pub fn set_sort(&self, sort: String) {
        self.dispatch(QueryAction::SetSort(sort));
    }

    pub fn set_search(&self, q: String) {
        self.dispatch(QueryAction::SetSearch(q));
    }

    pub fn set_page(&self, page: u32) {
        self.current_page.set(page.max(1));
        self.dispatch(QueryAction::SetPage(page));
    }

    pub fn clear_all(&self) {
        self.dispatch(QueryAction::ClearAll);
    }
}

pub fn use_query_state() -> QueryStateHandle {
    let ctx = use_global_context();
    let initial = ctx.location.with_untracked(|url| {
        let (path, query) = split_url(url);
        QueryState::from_url(path, query)
    });
    let current_page = RwSignal::new(initial.current_page().get());
    let state = RwSignal::new(initial);

    Effect::new(move |_| {
        let parsed = ctx.location.with(|url| {
            let (path, query) = split_url(url);
            QueryState::from_url(path, query)
        });
        let changed = state.with_untracked(|s| *s != parsed);
        if changed {
            log::debug!("query state synced from location: {}", parsed.to_url());
            current_page.set(parsed.current_page().get());
            state.set(parsed);
        }
    });

    QueryStateHandle {
        state,
        current_page,
        navigator: BrowserNavigator::new(ctx.location),
    }
}
