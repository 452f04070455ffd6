use crate::shared::components::{remove_row, update_row, AdminListPage, StatusBadge, TableColumn};
use crate::shared::date_utils::date_cell;
use crate::shared::i18n::use_i18n;
use crate::shared::mock_api::fetch_products;
use contracts::domain::a001_product::{Product, ProductStatus};
use contracts::shared::query_state::FacetKind;
use contracts::shared::table::{Align, CellValue, Column, RowAction, SortConfig};
use leptos::prelude::*;

fn columns() -> Vec<TableColumn<Product>> {
    let i18n = use_i18n();
    vec![
        TableColumn::from(
            Column::new("name", "col.product", |p: &Product| p.name_en.as_str().into())
                .sortable()
                .min_width(220.0),
        )
        .render(move |p: &Product| {
            let product = p.clone();
            view! { <span>{move || product.name(i18n.locale()).to_string()}</span> }.into_any()
        }),
        Column::new("brand", "col.brand", |p: &Product| p.brand.as_str().into())
            .sortable()
            .into(),
        Column::new("price", "col.price", |p: &Product| p.price.into())
            .sortable()
            .align(Align::Right)
            .width(110.0)
            .into(),
        Column::new("stock", "col.stock", |p: &Product| p.stock.into())
            .sortable()
            .align(Align::Right)
            .width(90.0)
            .into(),
        Column::new("rating", "col.rating", |p: &Product| CellValue::Number(p.rating))
            .sortable()
            .align(Align::Right)
            .width(90.0)
            .into(),
        TableColumn::from(
            Column::new("status", "common.status", |p: &Product| p.status.code().into()).sortable(),
        )
        .render(|p: &Product| {
            view! { <StatusBadge code=p.status.code() label_id=p.status.label_id() /> }.into_any()
        }),
        Column::new("created_at", "common.created_at", |p: &Product| date_cell(p.created_at))
            .sortable()
            .into(),
    ]
}

#[component]
pub fn ProductList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<Product>::new());

    let actions = vec![
        RowAction::new("action.activate", move |p: &Product, _| {
            update_row(rows, &p.id, |p| p.status = ProductStatus::Active);
        })
        .icon("check")
        .visible_when(|p: &Product| p.status != ProductStatus::Active),
        RowAction::new("action.delete", move |p: &Product, _| {
            log::info!("product {} deleted", p.id);
            remove_row(rows, &p.id);
        })
        .icon("trash"),
    ];

    view! {
        <AdminListPage
            page_id="a001_product--list"
            title="nav.products"
            rows=rows
            fetch=fetch_products
            columns=columns()
            actions=actions
            facets=vec![ProductStatus::facet(FacetKind::Multi)]
            default_sort=SortConfig::ascending("name")
        />
    }
}
