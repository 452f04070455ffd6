use crate::shared::components::{remove_row, AdminListPage, StatusBadge, TableColumn};
use crate::shared::date_utils::datetime_cell;
use crate::shared::i18n::use_i18n;
use crate::shared::mock_api::fetch_flash_sales;
use chrono::{Local, NaiveDateTime};
use contracts::domain::a005_flash_sale::{FlashSale, FlashSaleStatus};
use contracts::shared::i18n::Locale;
use contracts::shared::query_state::FacetKind;
use contracts::shared::table::{Align, CellValue, Column, RowAction, SortConfig};
use leptos::prelude::*;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn columns() -> Vec<TableColumn<FlashSale>> {
    let i18n = use_i18n();
    vec![
        TableColumn::from(
            Column::new("title", "col.title", |s: &FlashSale| s.title_en.as_str().into())
                .sortable()
                .min_width(200.0),
        )
        .render(move |s: &FlashSale| {
            let sale = s.clone();
            view! {
                <span>
                    {move || match i18n.locale() {
                        Locale::En => sale.title_en.clone(),
                        Locale::Ar => sale.title_ar.clone(),
                    }}
                </span>
            }
            .into_any()
        }),
        TableColumn::from(
            Column::new("discount", "col.discount", |s: &FlashSale| s.discount_percent.into())
                .sortable()
                .align(Align::Right),
        )
        .render(|s: &FlashSale| view! { <span>{format!("-{}%", s.discount_percent)}</span> }.into_any()),
        Column::new("products_count", "col.products_count", |s: &FlashSale| s.products_count.into())
            .align(Align::Right)
            .into(),
        Column::new("starts_at", "col.starts", |s: &FlashSale| datetime_cell(s.starts_at))
            .sortable()
            .into(),
        Column::new("ends_at", "col.ends", |s: &FlashSale| datetime_cell(s.ends_at))
            .sortable()
            .into(),
        TableColumn::from(Column::new("status", "common.status", |s: &FlashSale| {
            CellValue::from(s.status_at(now()).code())
        }))
        .render(|s: &FlashSale| {
            let status = s.status_at(now());
            view! { <StatusBadge code=status.code() label_id=status.label_id() /> }.into_any()
        }),
    ]
}

#[component]
pub fn FlashSaleList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<FlashSale>::new());

    let actions = vec![
        // Идущую распродажу не удаляем
        RowAction::new("action.delete", move |s: &FlashSale, _| remove_row(rows, &s.id))
            .icon("trash")
            .visible_when(|s: &FlashSale| !s.is_active_at(now())),
    ];

    view! {
        <AdminListPage
            page_id="a005_flash_sale--list"
            title="nav.flash_sales"
            rows=rows
            fetch=fetch_flash_sales
            columns=columns()
            actions=actions
            facets=vec![FlashSaleStatus::facet(FacetKind::Multi)]
            default_sort=SortConfig::ascending("starts_at")
        />
    }
}
