use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::shared::table::{clamp_page, page_window, pager_bounds};
use leptos::prelude::*;

/// Сколько номеров страниц показывать по обе стороны от текущей
const PAGE_WINDOW_RADIUS: usize = 2;

/// PaginationControls component - reusable pagination controls
///
/// Страницы нумеруются с 1. First/Prev недоступны на первой странице,
/// Next/Last — на последней; номер вне диапазона не отправляется.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Current page size; the size select is shown only together with `on_page_size_change`
    #[prop(optional, into)]
    page_size: Signal<usize>,

    #[prop(default = None)]
    on_page_size_change: Option<Callback<usize>>,

    /// Available page size options
    #[prop(default = None)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let last_page = move || total_pages.get().max(1);
    let go = move |page: usize| {
        let page = clamp_page(page, total_pages.get_untracked());
        if page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };
    let at_start = move || pager_bounds(current_page.get(), total_pages.get()).0;
    let at_end = move || pager_bounds(current_page.get(), total_pages.get()).1;

    let size_select = on_page_size_change.map(|on_size| {
        let options = page_size_options.unwrap_or_else(|| vec![10, 25, 50]);
        view! {
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_size.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        }
    });

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(1)
                disabled=at_start
                title=move || i18n.t("table.first_page")
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                disabled=at_start
                title=move || i18n.t("table.prev_page")
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, last_page(), PAGE_WINDOW_RADIUS)
                    .into_iter()
                    .map(|page| {
                        let class = if page == current {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button class=class on:click=move |_| go(page)>
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <span class="pagination-info">
                {move || format!("{} / {} ({})", current_page.get(), last_page(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get_untracked() + 1)
                disabled=at_end
                title=move || i18n.t("table.next_page")
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(total_pages.get_untracked())
                disabled=at_end
                title=move || i18n.t("table.last_page")
            >
                {icon("chevrons-right")}
            </button>
            {size_select}
        </div>
    }
}
