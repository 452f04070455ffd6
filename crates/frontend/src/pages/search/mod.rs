//! Витрина: категории из пути, фасеты, сортировка и номер страницы — в URL.
//!
//! `/search/electronics/audio?brand=Sonic&color=black,white&sort=price_asc&page=2`

pub mod category_tree;
pub mod product_card;

use self::category_tree::{CategoryBreadcrumbs, CategoryTree};
use self::product_card::ProductCard;
use crate::layout::global_context::use_global_context;
use crate::shared::components::{ActiveFilterTags, FacetGroup, FilterPanel, PaginationControls};
use crate::shared::i18n::use_i18n;
use crate::shared::list_utils::SearchInput;
use crate::shared::mock_api::{fetch_products, load_into};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use crate::shared::query_state::use_query_state;
use contracts::domain::a001_product::{search_products, sort_options, storefront_facets, Product};
use contracts::shared::table::{page_range, total_pages};
use leptos::prelude::*;

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = use_global_context();
    let i18n = use_i18n();
    let query = use_query_state();
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(false);
    let is_filter_expanded = RwSignal::new(true);

    load_into(products, loading, fetch_products);

    let (items_per_page, default_sort) = ctx
        .config
        .with_value(|c| (c.search.items_per_page, c.search.default_sort.clone()));
    let default_sort = StoredValue::new(default_sort);

    let facets = Memo::new(move |_| products.with(|p| storefront_facets(p)));

    let results = Signal::derive(move || {
        let state = query.state();
        products.with(|p| {
            search_products(p, &state)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let page_count = Signal::derive(move || total_pages(results.with(Vec::len), items_per_page));
    // номер из URL больше числа страниц — показываем последнюю
    let current_page = Signal::derive(move || (query.page() as usize).clamp(1, page_count.get().max(1)));

    let page_items = Signal::derive(move || {
        results.with(|items| {
            let range = page_range(items.len(), current_page.get(), items_per_page);
            items[range].to_vec()
        })
    });

    let current_sort = Signal::derive(move || default_sort.with_value(|d| query.sort(d)));

    let sort_select = move || {
        view! {
            <label class="search__sort">
                <span>{move || i18n.t("search.sort")}</span>
                <select
                    prop:value=move || current_sort.get()
                    on:change=move |ev| query.set_sort(event_target_value(&ev))
                >
                    {sort_options()
                        .iter()
                        .map(|option| {
                            let id = option.id;
                            let label = option.label;
                            view! {
                                <option value=id selected=move || current_sort.get() == id>
                                    {move || i18n.t(label)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        }
    };

    let active_filters_count = Signal::derive(move || query.with_state(|s| s.filters.selected_count()));

    view! {
        <PageFrame page_id="search--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || i18n.t("search.title")}</h1>
                    <span class="search__count">
                        {move || format!("{} {}", results.with(Vec::len), i18n.t("search.results"))}
                    </span>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || query.q())
                        on_change=Callback::new(move |q: String| query.set_search(q))
                        placeholder=Signal::derive(move || i18n.t("common.search_placeholder"))
                    />
                </div>
            </div>

            <div class="page__content search">
                <aside class="search__sidebar">
                    <CategoryTree query=query />
                </aside>

                <section class="search__main">
                    <CategoryBreadcrumbs query=query />

                    <FilterPanel
                        is_expanded=is_filter_expanded
                        active_filters_count=active_filters_count
                        header_extra=sort_select
                        filter_tags=move || view! { <ActiveFilterTags facets=facets.get() query=query /> }
                    >
                        <div class="filter-panel__row">
                            {move || {
                                facets
                                    .get()
                                    .into_iter()
                                    .map(|facet| view! { <FacetGroup facet=facet query=query /> })
                                    .collect_view()
                            }}
                        </div>
                    </FilterPanel>

                    {move || {
                        if loading.get() {
                            return view! { <div class="page__loading">{i18n.t("common.loading")}</div> }.into_any();
                        }
                        if page_items.with(Vec::is_empty) {
                            return view! { <div class="search__empty">{i18n.t("search.no_results")}</div> }.into_any();
                        }
                        let q = query.q();
                        view! {
                            <div class="product-grid">
                                {page_items
                                    .get()
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product highlight=q.clone() /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }}

                    <PaginationControls
                        current_page=current_page
                        total_pages=page_count
                        total_count=Signal::derive(move || results.with(Vec::len))
                        on_page_change=Callback::new(move |page: usize| {
                            query.set_page(u32::try_from(page).unwrap_or(u32::MAX))
                        })
                    />
                </section>
            </div>
        </PageFrame>
    }
}
