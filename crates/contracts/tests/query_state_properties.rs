//! Свойства редьюсера фильтров и модели таблицы на случайных входах.

use contracts::shared::query_state::{reduce, FacetKind, QueryAction, QueryState, RESERVED_KEYS};
use contracts::shared::table::{
    page_range, sorted_indices, total_pages, CellValue, Column, TableState,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn facet_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("color".to_string()),
        Just("size".to_string()),
        Just("brand".to_string()),
        Just("page".to_string()),
        Just("sort".to_string()),
        Just("q".to_string()),
    ]
}

fn facet_value() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{1,8}"
}

fn query_string() -> impl Strategy<Value = String> {
    prop::collection::vec((facet_key(), prop::collection::vec("[a-z0-9]{1,5}", 1..4)), 0..6).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .map(|(k, vs)| format!("{}={}", k, vs.join(",")))
                .collect::<Vec<_>>()
                .join("&")
        },
    )
}

fn value_set(state: &QueryState) -> BTreeSet<(String, String)> {
    state
        .filters
        .iter()
        .flat_map(|(k, vs)| vs.iter().map(move |v| (k.to_string(), v.clone())))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Reserved keys never leak into the filter map, and facet values keep URL order.
    #[test]
    fn derived_filters_exclude_reserved_keys(query in query_string()) {
        let state = QueryState::from_url("/search", &query);
        for reserved in RESERVED_KEYS {
            prop_assert!(state.filters.get(reserved).is_none());
        }
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap();
            if RESERVED_KEYS.contains(&key) {
                continue;
            }
            let stored = state.filters.get(key).unwrap();
            for part in value.split(',') {
                prop_assert!(stored.iter().any(|v| v == part));
            }
        }
    }

    /// The URL projection parses back to the same state.
    #[test]
    fn url_projection_round_trips(query in query_string(), q in proptest::option::of(facet_value())) {
        let mut state = QueryState::from_url("/search/fashion", &query);
        if let Some(q) = q {
            state = reduce(&state, QueryAction::SetSearch(q));
        }
        let url = state.to_url();
        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        prop_assert_eq!(QueryState::from_url(path, query), state);
    }

    /// Toggling the same value twice restores the selected set; exactly when it was absent.
    #[test]
    fn multi_toggle_pairs_cancel(query in query_string(), key in "[a-z]{1,4}", value in facet_value()) {
        let key = format!("f{}", key);
        let state = QueryState::from_url("/search", &query);
        let once = reduce(&state, QueryAction::toggle(key.clone(), value.clone(), FacetKind::Multi));
        let twice = reduce(&once, QueryAction::toggle(key.clone(), value.clone(), FacetKind::Multi));
        prop_assert_eq!(value_set(&twice), value_set(&state));
        if !state.filters.contains(&key, &value) {
            prop_assert_eq!(&twice.filters, &state.filters);
        }
    }

    /// A toggle on any key never makes a reserved key part of the filter map.
    #[test]
    fn toggles_keep_reserved_keys_out(query in query_string(), key in facet_key(), value in facet_value()) {
        let state = QueryState::from_url("/search", &query);
        for kind in [FacetKind::Multi, FacetKind::Single] {
            let next = reduce(&state, QueryAction::toggle(key.clone(), value.clone(), kind));
            for reserved in RESERVED_KEYS {
                prop_assert!(next.filters.get(reserved).is_none());
            }
        }
    }

    /// Every filter or sort change drops the page parameter; SetPage changes nothing else.
    #[test]
    fn non_page_actions_reset_page(query in query_string(), value in facet_value(), page in 1u32..50) {
        let state = QueryState::from_url("/search", &format!("{}&page={}", query, page));
        for action in [
            QueryAction::toggle("color", value.clone(), FacetKind::Multi),
            QueryAction::toggle("brand", value.clone(), FacetKind::Single),
            QueryAction::SetSort(value.clone()),
            QueryAction::SetSearch(value.clone()),
            QueryAction::SelectCategory { path: vec![value.clone()] },
            QueryAction::ClearAll,
        ] {
            prop_assert!(reduce(&state, action).page.is_none());
        }
        let paged = reduce(&state, QueryAction::SetPage(page + 1));
        prop_assert_eq!(&paged.filters, &state.filters);
        prop_assert_eq!(&paged.sort, &state.sort);
        prop_assert_eq!(paged.current_page().get(), page + 1);
    }

    /// Three clicks on one header restore the input order.
    #[test]
    fn sort_is_a_three_cycle(values in prop::collection::vec(-50i64..50, 0..30)) {
        let columns = vec![Column::new("v", "V", |v: &i64| CellValue::Integer(*v)).sortable()];
        let mut state = TableState::default();
        for _ in 0..3 {
            state.toggle_sort("v");
        }
        prop_assert!(state.sort.is_none());
        prop_assert_eq!(
            sorted_indices(&values, &columns, state.sort.as_ref()),
            (0..values.len()).collect::<Vec<_>>()
        );
    }

    /// Pages partition the sorted rows without gaps or overlap.
    #[test]
    fn pages_partition_rows(len in 0usize..200, per_page in 1usize..25) {
        let pages = total_pages(len, per_page);
        let mut covered = 0;
        for page in 1..=pages {
            let range = page_range(len, page, per_page);
            prop_assert_eq!(range.start, covered);
            prop_assert!(!range.is_empty());
            covered = range.end;
        }
        prop_assert_eq!(covered, len);
        let mut state = TableState::default();
        state.go_to_page(pages + 5, pages);
        prop_assert_eq!(state.page, pages.max(1));
    }

    /// Toggling a row twice restores the selection.
    #[test]
    fn select_twice_is_identity(ids in prop::collection::btree_set("[a-z]{1,3}", 0..10), id in "[a-z]{1,3}") {
        let mut state = TableState::default();
        for existing in &ids {
            state.toggle_select(existing);
        }
        let before = state.selection.clone();
        state.toggle_select(&id);
        prop_assert_ne!(&state.selection, &before);
        state.toggle_select(&id);
        prop_assert_eq!(&state.selection, &before);
    }
}
