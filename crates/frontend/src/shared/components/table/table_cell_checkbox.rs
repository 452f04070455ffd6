//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки

use leptos::prelude::*;
use thaw::*;

/// Компонент чекбокса в ячейке таблицы
///
/// - Останавливает propagation клика (чтобы не вызывать клик на строке)
/// - Вызывает callback с id строки при изменении
#[component]
pub fn TableCellCheckbox(
    /// ID текущего элемента
    #[prop(into)]
    item_id: String,

    #[prop(into)]
    checked: Signal<bool>,

    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_change.run(item_id.clone())
            />
        </TableCell>
    }
}
