use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::query_state::QueryStateHandle;
use contracts::shared::query_state::{FacetDescriptor, FacetKind};
use leptos::prelude::*;

/// FilterPanel component - collapsible filter panel
///
/// Шапка с количеством активных фильтров, необязательный слот справа
/// (пагинация, сортировка) и сворачиваемое содержимое.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Правая часть шапки - optional
    #[prop(optional, into)]
    header_extra: Option<ViewFn>,

    /// Filter tags (active filter chips) - optional
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">{move || i18n.t("common.filters")}</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                {header_extra.map(|extra| view! {
                    <div class="filter-panel-header__center">{extra.run()}</div>
                })}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                    {filter_tags.map(|tags| view! {
                        <div class="filter-panel__tags">{tags.run()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Группа значений одного фасета: флажки для мультивыбора, радио для одиночного.
#[component]
pub fn FacetGroup(facet: FacetDescriptor, query: QueryStateHandle) -> impl IntoView {
    let i18n = use_i18n();
    let FacetDescriptor {
        key,
        kind,
        label,
        options,
    } = facet;
    let input_type = match kind {
        FacetKind::Single => "radio",
        FacetKind::Multi => "checkbox",
    };
    let group_label = label.clone();

    let items = options
        .into_iter()
        .map(|option| {
            let key_checked = key.clone();
            let key_click = key.clone();
            let value_checked = option.value.clone();
            let value_click = option.value.clone();
            let option_label = option.label.clone();
            view! {
                <label class="facet-group__option">
                    <input
                        type=input_type
                        name=key.clone()
                        value=option.value.clone()
                        prop:checked=move || query.is_selected(&key_checked, &value_checked)
                        // click, не change: повторный клик по выбранному радио снимает выбор
                        on:click=move |_| query.toggle_facet(&key_click, &value_click, kind)
                    />
                    <span>{move || i18n.label(&option_label)}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset class="facet-group" data-facet=key.clone()>
            <legend class="facet-group__title">{move || i18n.label(&group_label)}</legend>
            {items}
        </fieldset>
    }
}

/// Чипы активных фильтров и кнопка «Очистить всё» (сохраняет `q` и `sort`).
#[component]
pub fn ActiveFilterTags(facets: Vec<FacetDescriptor>, query: QueryStateHandle) -> impl IntoView {
    let i18n = use_i18n();
    let facets = StoredValue::new(facets);

    let tags = move || {
        let filters = query.filters();
        let mut views = Vec::new();
        for (key, values) in filters.iter() {
            let (kind, facet_label) = facets.with_value(|all| {
                all.iter()
                    .find(|f| f.key == key)
                    .map(|f| (f.kind, f.label.clone()))
                    .unwrap_or((FacetKind::Multi, key.to_string()))
            });
            for value in values {
                let option_label = facets
                    .with_value(|all| {
                        all.iter()
                            .find(|f| f.key == key)
                            .and_then(|f| f.option_label(value))
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| value.clone());
                let text = format!("{}: {}", i18n.label(&facet_label), i18n.label(&option_label));
                let key = key.to_string();
                let value = value.clone();
                views.push(view! {
                    <FilterTag
                        label=text
                        on_remove=Callback::new(move |_| query.toggle_facet(&key, &value, kind))
                    />
                });
            }
        }
        views
    };

    view! {
        {move || (!query.filters().is_empty() || !query.category_path().is_empty()).then(|| view! {
            <div class="filter-tags">
                {tags()}
                <button class="filter-tags__clear" on:click=move |_| query.clear_all()>
                    {move || i18n.t("common.clear_all")}
                </button>
            </div>
        })}
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
