use crate::shared::components::{remove_row, update_row, AdminListPage, StatusBadge, TableColumn};
use crate::shared::date_utils::date_cell;
use crate::shared::mock_api::fetch_reviews;
use contracts::domain::a002_review::{Review, ReviewStatus};
use contracts::shared::query_state::FacetKind;
use contracts::shared::table::{Align, Column, RowAction, SortConfig};
use leptos::prelude::*;

fn stars(rating: u32) -> String {
    let rating = rating.min(5) as usize;
    format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating))
}

fn columns() -> Vec<TableColumn<Review>> {
    vec![
        Column::new("product", "col.product", |r: &Review| r.product_name.as_str().into())
            .sortable()
            .min_width(200.0)
            .into(),
        Column::new("customer", "col.customer", |r: &Review| r.customer.as_str().into())
            .sortable()
            .into(),
        TableColumn::from(
            Column::new("rating", "col.rating", |r: &Review| r.rating.into())
                .sortable()
                .align(Align::Center)
                .width(110.0),
        )
        .render(|r: &Review| view! { <span class="rating-stars">{stars(r.rating)}</span> }.into_any()),
        Column::new("comment", "col.comment", |r: &Review| r.comment.as_str().into())
            .min_width(240.0)
            .into(),
        TableColumn::from(
            Column::new("status", "common.status", |r: &Review| r.status.code().into()).sortable(),
        )
        .render(|r: &Review| {
            view! { <StatusBadge code=r.status.code() label_id=r.status.label_id() /> }.into_any()
        }),
        Column::new("created_at", "common.created_at", |r: &Review| date_cell(r.created_at))
            .sortable()
            .into(),
    ]
}

#[component]
pub fn ReviewList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<Review>::new());

    let actions = vec![
        RowAction::new("action.approve", move |r: &Review, _| {
            update_row(rows, &r.id, |r| r.status = ReviewStatus::Approved);
        })
        .icon("check")
        .visible_when(|r: &Review| r.status != ReviewStatus::Approved),
        RowAction::new("action.reject", move |r: &Review, _| {
            update_row(rows, &r.id, |r| r.status = ReviewStatus::Rejected);
        })
        .icon("x")
        .visible_when(|r: &Review| r.status == ReviewStatus::Pending),
        RowAction::new("action.delete", move |r: &Review, _| remove_row(rows, &r.id)).icon("trash"),
    ];

    view! {
        <AdminListPage
            page_id="a002_review--list"
            title="nav.reviews"
            rows=rows
            fetch=fetch_reviews
            columns=columns()
            actions=actions
            facets=vec![ReviewStatus::facet(FacetKind::Multi)]
            default_sort=SortConfig::descending("created_at")
        />
    }
}

#[cfg(test)]
mod tests {
    use super::stars;

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
