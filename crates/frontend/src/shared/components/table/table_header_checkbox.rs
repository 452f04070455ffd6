//! Чекбокс «выбрать все на странице» в заголовке таблицы.

use contracts::shared::table::CheckState;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Компонент чекбокса в заголовке таблицы
///
/// - Показывает три состояния: unchecked, checked, indeterminate
/// - Клик всегда отдаётся в `on_toggle`; что выбрать или снять, решает состояние таблицы
#[component]
pub fn TableHeaderCheckbox(
    /// Состояние для строк текущей страницы
    #[prop(into)]
    state: Signal<CheckState>,

    #[prop(into)]
    on_toggle: Callback<()>,

    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate нельзя задать атрибутом — только через DOM
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), CheckState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                disabled=move || disabled.get()
                prop:checked=move || matches!(state.get(), CheckState::Checked)
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}
