use crate::shared::components::{update_row, AdminListPage, StatusBadge, TableColumn};
use crate::shared::date_utils::date_cell;
use crate::shared::mock_api::fetch_vendors;
use contracts::domain::a004_vendor::{Vendor, VendorStatus};
use contracts::shared::query_state::FacetKind;
use contracts::shared::table::{Align, Column, RowAction, SortConfig};
use leptos::prelude::*;

fn columns() -> Vec<TableColumn<Vendor>> {
    vec![
        Column::new("name", "common.name", |v: &Vendor| v.name.as_str().into())
            .sortable()
            .min_width(180.0)
            .into(),
        TableColumn::from(Column::new("email", "col.email", |v: &Vendor| v.email.as_str().into()))
            .render(|v: &Vendor| {
                let href = format!("mailto:{}", v.email);
                view! { <a href=href>{v.email.clone()}</a> }.into_any()
            }),
        Column::new("products_count", "col.products_count", |v: &Vendor| v.products_count.into())
            .sortable()
            .align(Align::Right)
            .into(),
        TableColumn::from(
            Column::new("status", "common.status", |v: &Vendor| v.status.code().into()).sortable(),
        )
        .render(|v: &Vendor| {
            view! { <StatusBadge code=v.status.code() label_id=v.status.label_id() /> }.into_any()
        }),
        Column::new("joined_at", "col.joined", |v: &Vendor| date_cell(v.joined_at))
            .sortable()
            .into(),
    ]
}

#[component]
pub fn VendorList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<Vendor>::new());

    let actions = vec![
        RowAction::new("action.activate", move |v: &Vendor, _| {
            update_row(rows, &v.id, |v| v.status = VendorStatus::Active);
        })
        .icon("check")
        .visible_when(|v: &Vendor| v.status != VendorStatus::Active),
        RowAction::new("action.suspend", move |v: &Vendor, _| {
            log::info!("vendor {} suspended", v.id);
            update_row(rows, &v.id, |v| v.status = VendorStatus::Suspended);
        })
        .icon("x")
        .visible_when(|v: &Vendor| v.status == VendorStatus::Active),
    ];

    view! {
        <AdminListPage
            page_id="a004_vendor--list"
            title="nav.vendors"
            rows=rows
            fetch=fetch_vendors
            columns=columns()
            actions=actions
            facets=vec![VendorStatus::facet(FacetKind::Multi)]
            default_sort=SortConfig::descending("joined_at")
        />
    }
}
