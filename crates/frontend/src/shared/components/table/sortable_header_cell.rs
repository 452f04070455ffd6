//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label=Signal::derive(move || i18n.t("col.price"))
//!     sort_field="price"
//!     direction=Signal::derive(move || state.with(|s| s.sort_direction("price")))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
//!     align=Align::Right
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table::{Align, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Автоматически:
/// - Добавляет индикатор сортировки (▲▼⇅)
/// - Обрабатывает клики для изменения сортировки (asc → desc → без сортировки)
/// - Поддерживает resizable колонки
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: Signal<String>,

    /// Поле для сортировки (ключ колонки)
    #[prop(into)]
    sort_field: String,

    /// Направление сортировки этой колонки, `None` — колонка не отсортирована
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка
    #[prop(optional)]
    align: Align,

    /// Можно ли изменять размер колонки
    #[prop(optional, default = true)]
    resizable: bool,

    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let handle_click = move |_| on_sort.run(sort_field.clone());

    let header_style = match align {
        Align::Right => "cursor: pointer; justify-content: flex-end; padding-inline-end: 12px;",
        Align::Center => "cursor: pointer; justify-content: center;",
        Align::Left => "cursor: pointer; padding-inline-end: 12px;",
    };
    let class = match class {
        Some(extra) => format!("resizable {extra}"),
        None => "resizable".to_string(),
    };

    view! {
        <TableHeaderCell resizable=resizable min_width=min_width class=class>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {move || label.get()}
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
