use crate::shared::components::{remove_row, update_row, AdminListPage, StatusBadge, TableColumn};
use crate::shared::date_utils::date_cell;
use crate::shared::i18n::use_i18n;
use crate::shared::mock_api::fetch_pages;
use contracts::domain::a008_page::{Page, PageStatus};
use contracts::shared::i18n::Locale;
use contracts::shared::query_state::FacetKind;
use contracts::shared::table::{Column, RowAction, SortConfig};
use leptos::prelude::*;

fn columns() -> Vec<TableColumn<Page>> {
    let i18n = use_i18n();
    vec![
        TableColumn::from(
            Column::new("title", "col.title", |p: &Page| p.title_en.as_str().into())
                .sortable()
                .min_width(200.0),
        )
        .render(move |p: &Page| {
            let page = p.clone();
            view! {
                <span>
                    {move || match i18n.locale() {
                        Locale::En => page.title_en.clone(),
                        Locale::Ar => page.title_ar.clone(),
                    }}
                </span>
            }
            .into_any()
        }),
        TableColumn::from(Column::new("slug", "col.slug", |p: &Page| p.slug.as_str().into()))
            .render(|p: &Page| view! { <code>{format!("/{}", p.slug)}</code> }.into_any()),
        TableColumn::from(
            Column::new("status", "common.status", |p: &Page| p.status.code().into()).sortable(),
        )
        .render(|p: &Page| {
            view! { <StatusBadge code=p.status.code() label_id=p.status.label_id() /> }.into_any()
        }),
        Column::new("updated_at", "col.updated", |p: &Page| date_cell(p.updated_at))
            .sortable()
            .into(),
    ]
}

#[component]
pub fn PageList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<Page>::new());

    let actions = vec![
        RowAction::new("action.activate", move |p: &Page, _| {
            update_row(rows, &p.id, |p| p.status = PageStatus::Published);
        })
        .icon("check")
        .visible_when(|p: &Page| p.status == PageStatus::Draft),
        RowAction::new("action.delete", move |p: &Page, _| remove_row(rows, &p.id)).icon("trash"),
    ];

    view! {
        <AdminListPage
            page_id="a008_page--list"
            title="nav.pages"
            rows=rows
            fetch=fetch_pages
            columns=columns()
            actions=actions
            facets=vec![PageStatus::facet(FacetKind::Single)]
            default_sort=SortConfig::descending("updated_at")
        />
    }
}
