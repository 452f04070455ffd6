use crate::shared::components::{update_row, AdminListPage, StatusBadge, TableColumn};
use crate::shared::date_utils::date_cell;
use crate::shared::mock_api::fetch_returns;
use contracts::domain::a006_return_request::{ReturnRequest, ReturnStatus};
use contracts::shared::query_state::FacetKind;
use contracts::shared::table::{Align, Column, RowAction, SortConfig};
use leptos::prelude::*;

fn columns() -> Vec<TableColumn<ReturnRequest>> {
    vec![
        Column::new("order_no", "col.order", |r: &ReturnRequest| r.order_no.as_str().into())
            .sortable()
            .width(120.0)
            .into(),
        Column::new("customer", "col.customer", |r: &ReturnRequest| r.customer.as_str().into())
            .sortable()
            .into(),
        Column::new("product", "col.product", |r: &ReturnRequest| r.product_name.as_str().into())
            .min_width(180.0)
            .into(),
        Column::new("reason", "col.reason", |r: &ReturnRequest| r.reason.as_str().into())
            .min_width(200.0)
            .into(),
        Column::new("amount", "col.amount", |r: &ReturnRequest| r.amount.into())
            .sortable()
            .align(Align::Right)
            .into(),
        TableColumn::from(
            Column::new("status", "common.status", |r: &ReturnRequest| r.status.code().into()).sortable(),
        )
        .render(|r: &ReturnRequest| {
            view! { <StatusBadge code=r.status.code() label_id=r.status.label_id() /> }.into_any()
        }),
        Column::new("created_at", "common.created_at", |r: &ReturnRequest| date_cell(r.created_at))
            .sortable()
            .into(),
    ]
}

#[component]
pub fn ReturnList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<ReturnRequest>::new());

    let actions = vec![
        RowAction::new("action.approve", move |r: &ReturnRequest, _| {
            update_row(rows, &r.id, |r| r.status = ReturnStatus::Approved);
        })
        .icon("check")
        .visible_when(|r: &ReturnRequest| r.status == ReturnStatus::Requested),
        RowAction::new("action.reject", move |r: &ReturnRequest, _| {
            update_row(rows, &r.id, |r| r.status = ReturnStatus::Rejected);
        })
        .icon("x")
        .visible_when(|r: &ReturnRequest| r.status == ReturnStatus::Requested),
        RowAction::new("action.refund", move |r: &ReturnRequest, _| {
            log::info!("refund {:.2} for order {}", r.amount, r.order_no);
            update_row(rows, &r.id, |r| r.status = ReturnStatus::Refunded);
        })
        .icon("rotate-ccw")
        .visible_when(ReturnRequest::can_refund),
    ];

    view! {
        <AdminListPage
            page_id="a006_return_request--list"
            title="nav.returns"
            rows=rows
            fetch=fetch_returns
            columns=columns()
            actions=actions
            facets=vec![ReturnStatus::facet(FacetKind::Multi)]
            default_sort=SortConfig::descending("created_at")
        />
    }
}
