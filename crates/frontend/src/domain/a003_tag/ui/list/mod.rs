use crate::shared::components::{remove_row, update_row, AdminListPage, StatusBadge, TableColumn};
use crate::shared::i18n::use_i18n;
use crate::shared::mock_api::fetch_tags;
use contracts::domain::a003_tag::{Tag, TagStatus};
use contracts::shared::i18n::Locale;
use contracts::shared::query_state::FacetKind;
use contracts::shared::table::{Align, Column, RowAction};
use leptos::prelude::*;

fn columns() -> Vec<TableColumn<Tag>> {
    let i18n = use_i18n();
    vec![
        TableColumn::from(
            Column::new("name", "common.name", |t: &Tag| t.name_en.as_str().into()).sortable(),
        )
        .render(move |t: &Tag| {
            let tag = t.clone();
            view! {
                <span>
                    {move || match i18n.locale() {
                        Locale::En => tag.name_en.clone(),
                        Locale::Ar => tag.name_ar.clone(),
                    }}
                </span>
            }
            .into_any()
        }),
        Column::new("slug", "col.slug", |t: &Tag| t.slug.as_str().into()).into(),
        Column::new("products_count", "col.products_count", |t: &Tag| t.products_count.into())
            .sortable()
            .align(Align::Right)
            .into(),
        TableColumn::from(Column::new("status", "common.status", |t: &Tag| t.status.code().into()))
            .render(|t: &Tag| {
                view! { <StatusBadge code=t.status.code() label_id=t.status.label_id() /> }.into_any()
            }),
    ]
}

#[component]
pub fn TagList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<Tag>::new());

    let actions = vec![
        RowAction::new("action.activate", move |t: &Tag, _| {
            update_row(rows, &t.id, |t| t.status = TagStatus::Active);
        })
        .icon("check")
        .visible_when(|t: &Tag| t.status == TagStatus::Draft),
        // Нельзя удалить тег, к которому привязаны товары
        RowAction::new("action.delete", move |t: &Tag, _| remove_row(rows, &t.id))
            .icon("trash")
            .visible_when(|t: &Tag| t.products_count == 0),
    ];

    view! {
        <AdminListPage
            page_id="a003_tag--list"
            title="nav.tags"
            rows=rows
            fetch=fetch_tags
            columns=columns()
            actions=actions
            facets=vec![TagStatus::facet(FacetKind::Single)]
        />
    }
}
