//! Каркас страницы списка в админке: заголовок, фильтры из URL, таблица, массовое удаление.

use super::badge::Badge;
use super::data_table::{DataTable, TableColumn};
use super::filter_panel::{ActiveFilterTags, FacetGroup, FilterPanel};
use crate::layout::global_context::use_global_context;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::mock_api::load_into;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::use_query_state;
use contracts::shared::list_filter::{filter_list, Searchable};
use contracts::shared::query_state::FacetDescriptor;
use contracts::shared::table::{RowAction, SortConfig, TableOptions, TableRow};
use leptos::prelude::*;
use std::collections::HashSet;
use std::future::Future;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn AdminListPage<T, Fut>(
    page_id: &'static str,
    /// Message id заголовка
    title: &'static str,
    /// Строки списка; действия страницы меняют их напрямую
    rows: RwSignal<Vec<T>>,
    fetch: fn(u32) -> Fut,
    columns: Vec<TableColumn<T>>,
    #[prop(optional)]
    actions: Vec<RowAction<T>>,
    #[prop(optional)]
    facets: Vec<FacetDescriptor>,
    #[prop(optional)]
    default_sort: Option<SortConfig>,
) -> impl IntoView
where
    T: TableRow + Searchable + Clone + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Vec<T>>> + 'static,
{
    let i18n = use_i18n();
    let ctx = use_global_context();
    let query = use_query_state();
    let loading = RwSignal::new(false);
    let selected = RwSignal::new(Vec::<T>::new());
    let is_filter_expanded = RwSignal::new(true);

    load_into(rows, loading, fetch);

    let filtered = Signal::derive(move || {
        let state = query.state();
        rows.with(|items| filter_list(items, &state))
    });

    let delete_selected = move |_: leptos::ev::MouseEvent| {
        let ids: HashSet<String> = selected.with_untracked(|rows| rows.iter().map(TableRow::row_id).collect());
        if ids.is_empty() {
            return;
        }
        log::info!("{}: deleting {} rows", page_id, ids.len());
        rows.update(|items| items.retain(|r| !ids.contains(&r.row_id())));
    };

    let (items_per_page, page_size_options) = ctx
        .config
        .with_value(|c| (c.table.items_per_page, c.table.page_size_options.clone()));
    let options = TableOptions {
        selectable: true,
        items_per_page,
        default_sort,
        ..TableOptions::default()
    };

    let active_filters_count = Signal::derive(move || {
        query.with_state(|s| s.filters.selected_count() + usize::from(s.q.is_some()))
    });
    let tag_facets = facets.clone();
    let facet_groups = facets
        .into_iter()
        .map(|facet| view! { <FacetGroup facet=facet query=query /> })
        .collect_view();

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || i18n.t(title)}</h1>
                    <Badge variant="primary".to_string()>
                        {move || filtered.with(Vec::len).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    {move || {
                        let count = selected.with(Vec::len);
                        (count > 0).then(|| view! {
                            <span class="page__selection">
                                {format!("{} {}", count, i18n.t("common.selected"))}
                            </span>
                        })
                    }}
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=delete_selected
                        disabled=Signal::derive(move || selected.with(Vec::is_empty))
                    >
                        {icon("trash")}
                        {move || i18n.t("common.delete_selected")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    filter_tags=move || view! { <ActiveFilterTags facets=tag_facets.clone() query=query /> }
                >
                    <div class="filter-panel__row">
                        <SearchInput
                            value=Signal::derive(move || query.q())
                            on_change=Callback::new(move |q: String| query.set_search(q))
                            placeholder=Signal::derive(move || i18n.t("common.search_placeholder"))
                        />
                        {facet_groups}
                    </div>
                </FilterPanel>

                {move || if loading.get() {
                    view! { <div class="page__loading">{i18n.t("common.loading")}</div> }.into_any()
                } else {
                    view! {
                        <DataTable
                            data=filtered
                            columns=columns.clone()
                            actions=actions.clone()
                            options=options.clone()
                            on_selection_change=Callback::new(move |rows: Vec<T>| selected.set(rows))
                            page_size_options=page_size_options.clone()
                        />
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}

/// Изменяет строку списка по id (для действий вроде «Одобрить»).
pub fn update_row<T>(rows: RwSignal<Vec<T>>, id: &str, change: impl FnOnce(&mut T))
where
    T: TableRow + Send + Sync + 'static,
{
    rows.update(|items| {
        if let Some(row) = items.iter_mut().find(|r| r.row_id() == id) {
            change(row);
        } else {
            log::warn!("row {} not found", id);
        }
    });
}

pub fn remove_row<T>(rows: RwSignal<Vec<T>>, id: &str)
where
    T: TableRow + Send + Sync + 'static,
{
    rows.update(|items| items.retain(|r| r.row_id() != id));
}
