use crate::shared::components::{remove_row, AdminListPage, TableColumn};
use crate::shared::date_utils::date_cell;
use crate::shared::i18n::use_i18n;
use crate::shared::mock_api::fetch_spec_tables;
use contracts::domain::a001_product::category_tree;
use contracts::domain::a007_spec_table::SpecTable;
use contracts::shared::i18n::Locale;
use contracts::shared::query_state::{FacetDescriptor, FacetKind, FacetOption};
use contracts::shared::table::{Align, Column, RowAction};
use leptos::prelude::*;

/// Фасет по корневой категории каталога.
fn category_facet() -> FacetDescriptor {
    FacetDescriptor::new("category", FacetKind::Single, "search.categories").with_options(
        category_tree()
            .iter()
            .map(|node| FacetOption::new(node.slug.clone(), node.label.clone()))
            .collect(),
    )
}

fn columns() -> Vec<TableColumn<SpecTable>> {
    let i18n = use_i18n();
    vec![
        Column::new("name", "common.name", |s: &SpecTable| s.name.as_str().into())
            .sortable()
            .min_width(200.0)
            .into(),
        TableColumn::from(
            Column::new("category", "search.categories", |s: &SpecTable| s.category.as_str().into()).sortable(),
        )
        .render(move |s: &SpecTable| {
            let segments: Vec<String> = s.category.split('/').map(|slug| format!("category.{slug}")).collect();
            view! { <span>{move || segments.iter().map(|id| i18n.t(id)).collect::<Vec<_>>().join(" / ")}</span> }
                .into_any()
        }),
        TableColumn::from(
            Column::new("rows", "col.rows", |s: &SpecTable| (s.rows.len() as i64).into())
                .sortable()
                .align(Align::Right),
        )
        .render(move |s: &SpecTable| {
            let table = s.clone();
            // подсказка со списком характеристик на текущем языке
            let title = move || {
                table
                    .rows
                    .iter()
                    .map(|r| match i18n.locale() {
                        Locale::En => r.label_en.as_str(),
                        Locale::Ar => r.label_ar.as_str(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let count = s.rows.len();
            view! { <span title=title>{count}</span> }.into_any()
        }),
        Column::new("updated_at", "col.updated", |s: &SpecTable| date_cell(s.updated_at))
            .sortable()
            .into(),
    ]
}

#[component]
pub fn SpecTableList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<SpecTable>::new());

    let actions = vec![RowAction::new("action.delete", move |s: &SpecTable, _| {
        remove_row(rows, &s.id)
    })
    .icon("trash")];

    view! {
        <AdminListPage
            page_id="a007_spec_table--list"
            title="nav.spec_tables"
            rows=rows
            fetch=fetch_spec_tables
            columns=columns()
            actions=actions
            facets=vec![category_facet()]
        />
    }
}
