//! Дерево категорий витрины: выбор категории меняет путь `/search/{...}`.

use crate::shared::i18n::{use_i18n, I18n};
use crate::shared::query_state::QueryStateHandle;
use contracts::domain::a001_product::{category_tree, CategoryNode};
use leptos::prelude::*;

fn category_items(nodes: &[CategoryNode], parent: &[String], query: QueryStateHandle, i18n: I18n) -> AnyView {
    nodes
        .iter()
        .map(|node| {
            let mut path = parent.to_vec();
            path.push(node.slug.clone());
            let label = node.label.clone();
            let click_path = path.clone();
            let active_path = path.clone();
            // раскрываем только ветку выбранной категории
            let open_path = path.clone();
            let children = node.children.clone();
            view! {
                <li class="category-tree__node">
                    <button
                        class="category-tree__item"
                        class:category-tree__item--active=move || query.category_path() == active_path
                        on:click=move |_| query.select_category(click_path.clone())
                    >
                        {move || i18n.t(&label)}
                    </button>
                    {move || {
                        let expanded = query.category_path().starts_with(&open_path);
                        (expanded && !children.is_empty()).then(|| view! {
                            <ul class="category-tree__children">
                                {category_items(&children, &open_path, query, i18n)}
                            </ul>
                        })
                    }}
                </li>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn CategoryTree(query: QueryStateHandle) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <nav class="category-tree">
            <h3 class="category-tree__title">{move || i18n.t("search.categories")}</h3>
            <ul>
                <li class="category-tree__node">
                    <button
                        class="category-tree__item"
                        class:category-tree__item--active=move || query.category_path().is_empty()
                        on:click=move |_| query.select_category(Vec::new())
                    >
                        {move || i18n.t("search.all_categories")}
                    </button>
                </li>
                {category_items(category_tree(), &[], query, i18n)}
            </ul>
        </nav>
    }
}

/// Хлебные крошки выбранной категории: каждый сегмент ведёт на свой уровень.
#[component]
pub fn CategoryBreadcrumbs(query: QueryStateHandle) -> impl IntoView {
    let i18n = use_i18n();

    move || {
        let path = query.category_path();
        (!path.is_empty()).then(|| {
            let crumbs = (1..=path.len())
                .map(|depth| {
                    let target = path[..depth].to_vec();
                    let label = format!("category.{}", path[depth - 1]);
                    view! {
                        <span class="breadcrumbs__sep">"/"</span>
                        <button class="breadcrumbs__item" on:click=move |_| query.select_category(target.clone())>
                            {i18n.t(&label)}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class="breadcrumbs">
                    <button class="breadcrumbs__item" on:click=move |_| query.select_category(Vec::new())>
                        {i18n.t("search.all_categories")}
                    </button>
                    {crumbs}
                </div>
            }
        })
    }
}
