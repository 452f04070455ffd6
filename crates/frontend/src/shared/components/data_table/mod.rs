//! Универсальная таблица: сортировка по колонкам, пагинация, выбор строк, меню действий.
//!
//! Вся логика состояния — в `contracts::shared::table::TableState`,
//! компонент только связывает её с сигналами и разметкой thaw.
//!
//! ```ignore
//! <DataTable
//!     data=rows
//!     columns=vec![
//!         Column::new("name", "common.name", |r: &Tag| r.name.as_str().into()).sortable().into(),
//!     ]
//!     actions=vec![RowAction::new("action.delete", move |r: &Tag, _| remove(r.id.clone()))]
//!     options=TableOptions { selectable: true, ..Default::default() }
//!     on_selection_change=Callback::new(move |rows: Vec<Tag>| selected.set(rows))
//! />
//! ```

pub mod column;

pub use column::TableColumn;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::shared::table::{
    self as model, empty_row_colspan, page_range, resolve_row_id, selected_rows, sorted_indices, total_pages,
    visible_actions, Align, Column, RowAction, TableOptions, TableState,
};
use leptos::ev;
use std::collections::BTreeSet;
use leptos::prelude::*;
use thaw::*;

/// Строка текущей страницы: позиция в отсортированном наборе, id, данные.
#[derive(Clone)]
struct DisplayRow<T> {
    index: usize,
    id: String,
    row: T,
}

#[component]
pub fn DataTable<T>(
    /// Уже отфильтрованные данные; таблица их не изменяет
    #[prop(into)]
    data: Signal<Vec<T>>,

    columns: Vec<TableColumn<T>>,

    #[prop(optional)]
    actions: Vec<RowAction<T>>,

    #[prop(optional)]
    options: TableOptions,

    /// Выбранные строки в порядке отображения
    #[prop(optional)]
    on_selection_change: Option<Callback<Vec<T>>>,

    /// Варианты размера страницы; без них выбор размера не показывается
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView
where
    T: model::TableRow + Clone + Send + Sync + 'static,
{
    let i18n = use_i18n();
    let state = RwSignal::new(TableState::new(options.default_sort.clone()));
    let page_size = RwSignal::new(options.items_per_page);

    let model_columns: Vec<Column<T>> = columns.iter().map(|c| c.column.clone()).collect();
    let model_columns = StoredValue::new(model_columns);
    let render_columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let has_actions = actions.with_value(|a| !a.is_empty());
    let row_id_key = StoredValue::new(options.row_id_key.clone());

    let id_of = move |row: &T| {
        model_columns.with_value(|cols| row_id_key.with_value(|key| resolve_row_id(row, cols, key)))
    };

    // порядок строк после сортировки (индексы в data)
    let order = Signal::derive(move || {
        let sort = state.with(|s| s.sort.clone());
        data.with(|rows| model_columns.with_value(|cols| sorted_indices(rows, cols, sort.as_ref())))
    });

    let pagination = options.pagination;
    let page_count = Signal::derive(move || {
        if pagination {
            total_pages(order.with(Vec::len), page_size.get())
        } else {
            1
        }
    });
    let current_page = Signal::derive(move || state.with(|s| s.effective_page(page_count.get())));

    let page_rows = Signal::derive(move || {
        let order = order.get();
        let range = if pagination {
            page_range(order.len(), current_page.get(), page_size.get())
        } else {
            0..order.len()
        };
        data.with(|rows| {
            range
                .map(|position| {
                    let row = &rows[order[position]];
                    DisplayRow {
                        index: position,
                        id: id_of(row),
                        row: row.clone(),
                    }
                })
                .collect::<Vec<_>>()
        })
    });
    let page_ids = Signal::derive(move || page_rows.with(|rows| rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>()));

    let notify_selection = move || {
        let Some(callback) = on_selection_change else {
            return;
        };
        let selection = state.with_untracked(|s| s.selection.clone());
        let rows = data.with_untracked(|rows| {
            let order = order.get_untracked();
            selected_rows(rows, &order, &selection, id_of)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        });
        callback.run(rows);
    };

    // Смена набора строк (фильтр, поиск, удаление) возвращает на первую страницу,
    // исчезнувшие строки убираются из выбора
    Effect::new(move |previous: Option<BTreeSet<String>>| {
        let present: BTreeSet<String> = data.with(|rows| rows.iter().map(id_of).collect());
        let mut next = state.get_untracked();
        let selection_changed = next.sync_with_data(&present, previous.as_ref());
        if state.with_untracked(|current| *current != next) {
            state.set(next);
        }
        if selection_changed {
            notify_selection();
        }
        present
    });

    let toggle_sort = Callback::new(move |key: String| {
        state.update(|s| s.toggle_sort(&key));
    });

    let toggle_row = Callback::new(move |id: String| {
        let order = order.get_untracked();
        let rows = data.with_untracked(|rows| {
            let mut emitted = Vec::new();
            state.update(|s| {
                emitted = s
                    .toggle_select_rows(&id, rows, &order, id_of)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>();
            });
            emitted
        });
        if let Some(callback) = on_selection_change {
            callback.run(rows);
        }
    });

    let toggle_page = Callback::new(move |_: ()| {
        let ids = page_ids.get_untracked();
        let mut changed = false;
        state.update(|s| changed = s.select_all_on_page(&ids));
        if changed {
            notify_selection();
        }
    });

    let header_state = Signal::derive(move || {
        let ids = page_ids.get();
        state.with(|s| s.header_check_state(&ids))
    });

    let go_to_page = Callback::new(move |page: usize| {
        let total = page_count.get_untracked();
        state.update(|s| s.go_to_page(page, total));
    });

    let change_page_size = Callback::new(move |size: usize| {
        page_size.set(size.max(1));
        state.update(|s| {
            s.page = 1;
            s.close_action_menu();
        });
    });

    // Клик вне открытого меню закрывает его; слушатель живёт только пока меню открыто
    let outside_listener = StoredValue::new_local(None::<WindowListenerHandle>);
    Effect::new(move |_| {
        let open = state.with(|s| s.open_menu.is_some());
        if let Some(handle) = outside_listener.try_update_value(Option::take).flatten() {
            handle.remove();
        }
        if open {
            let handle = window_event_listener(ev::click, move |_| {
                state.update(|s| s.close_action_menu());
            });
            outside_listener.set_value(Some(handle));
        }
    });
    on_cleanup(move || {
        if let Some(handle) = outside_listener.try_update_value(Option::take).flatten() {
            handle.remove();
        }
    });

    let selectable = options.selectable;
    let colspan = empty_row_colspan(render_columns.with_value(Vec::len), selectable, has_actions);
    let empty_message = options.empty_message.clone();
    let row_class = options.row_class.clone();
    let header_class = options.header_class.clone();
    let table_class = match &options.class {
        Some(extra) => format!("data-table {extra}"),
        None => "data-table".to_string(),
    };
    let table_style = options
        .min_width
        .map(|w| format!("min-width: {w}px;"))
        .unwrap_or_default();

    let header_cells = render_columns.with_value(|cols| {
        cols.iter()
            .map(|c| {
                let column = c.column.clone();
                let header = column.header.clone();
                let label = Signal::derive(move || i18n.label(&header));
                let align_class = format!("table__cell--{}", column.align.as_str());
                let width_style = column.width.map(|w| format!("width: {w}px;")).unwrap_or_default();
                if column.sortable {
                    let key = column.key.clone();
                    let direction = Signal::derive(move || state.with(|s| s.sort_direction(&key)));
                    view! {
                        <SortableHeaderCell
                            label=label
                            sort_field=column.key.clone()
                            direction=direction
                            on_sort=toggle_sort
                            min_width=column.min_width
                            align=column.align
                            class=align_class
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <TableHeaderCell resizable=true min_width=column.min_width class=align_class>
                            <div style=width_style>{move || label.get()}</div>
                        </TableHeaderCell>
                    }
                    .into_any()
                }
            })
            .collect_view()
    });

    view! {
        <div class="data-table__wrapper">
            <Table class=table_class attr:style=table_style>
                <TableHeader class=header_class.unwrap_or_default()>
                    <TableRow>
                        {selectable.then(|| view! {
                            <TableHeaderCheckbox
                                state=header_state
                                on_toggle=toggle_page
                                disabled=Signal::derive(move || page_ids.with(Vec::is_empty))
                            />
                        })}
                        {header_cells}
                        {has_actions.then(|| view! {
                            <TableHeaderCell resizable=false class="table__actions-cell">
                                {move || i18n.t("common.actions")}
                            </TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if page_rows.with(Vec::is_empty) {
                            let message = empty_message.clone();
                            return view! {
                                <tr class="thaw-table-row table__empty-row">
                                    <td class="thaw-table-cell table__empty" colspan=colspan.to_string()>
                                        {move || i18n.label(&message)}
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        let row_class = row_class.clone().unwrap_or_default();
                        page_rows
                            .get()
                            .into_iter()
                            .map(|DisplayRow { index, id, row }| {
                                let checked_id = id.clone();
                                let checked = Signal::derive(move || state.with(|s| s.is_selected(&checked_id)));
                                let cells = render_columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|c| {
                                            let class = format!("table__cell--{}", c.column.align.as_str());
                                            let content = c.cell(&row);
                                            view! {
                                                <TableCell class=class>
                                                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()
                                });
                                view! {
                                    <TableRow class=row_class.clone()>
                                        {selectable.then(|| view! {
                                            <TableCellCheckbox item_id=id checked=checked on_change=toggle_row />
                                        })}
                                        {cells}
                                        {has_actions.then(|| view! {
                                            <ActionMenuCell row=row index=index state=state actions=actions />
                                        })}
                                    </TableRow>
                                }
                            })
                            .collect_view()
                        .into_any()
                    }}
                </TableBody>
            </Table>
            {pagination.then(|| view! {
                <PaginationControls
                    current_page=current_page
                    total_pages=page_count
                    total_count=Signal::derive(move || order.with(Vec::len))
                    on_page_change=go_to_page
                    page_size=page_size
                    on_page_size_change=page_size_options.as_ref().map(|_| change_page_size)
                    page_size_options=page_size_options.clone()
                />
            })}
        </div>
    }
}

/// Ячейка с кнопкой «⋮» и выпадающим списком действий, видимых для строки.
#[component]
fn ActionMenuCell<T>(
    row: T,
    index: usize,
    state: RwSignal<TableState>,
    actions: StoredValue<Vec<RowAction<T>>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let i18n = use_i18n();
    let row = StoredValue::new(row);
    let is_open = Signal::derive(move || state.with(|s| s.open_menu == Some(index)));

    let items = move || {
        let visible: Vec<RowAction<T>> = actions.with_value(|all| {
            row.with_value(|r| visible_actions(all, r).into_iter().cloned().collect())
        });
        visible
            .into_iter()
            .map(|action| {
                let label = action.label.clone();
                let action_icon = action.icon;
                view! {
                    <button
                        class="action-menu__item"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            state.update(|s| s.close_action_menu());
                            row.with_value(|r| action.run(r, index));
                        }
                    >
                        {action_icon.map(icon)}
                        <span>{move || i18n.label(&label)}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <TableCell class=format!("table__actions-cell table__cell--{}", Align::Right.as_str())>
            <div class="action-menu">
                <button
                    class="action-menu__trigger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        state.update(|s| s.toggle_action_menu(index));
                    }
                >
                    {icon("more-vertical")}
                </button>
                {move || is_open.get().then(|| view! {
                    <div class="action-menu__dropdown" on:click=|ev| ev.stop_propagation()>
                        {items()}
                    </div>
                })}
            </div>
        </TableCell>
    }
}

#[cfg(test)]
mod tests {
    use contracts::shared::table::{page_range, sorted_indices, total_pages, CellValue, Column, TableRow};

    #[derive(Clone)]
    struct Row {
        id: &'static str,
        name: &'static str,
    }

    impl TableRow for Row {
        fn row_id(&self) -> String {
            self.id.to_string()
        }
    }

    #[test]
    fn test_page_slice_follows_sorted_order() {
        let rows = vec![
            Row { id: "1", name: "e" },
            Row { id: "2", name: "d" },
            Row { id: "3", name: "c" },
            Row { id: "4", name: "b" },
            Row { id: "5", name: "a" },
        ];
        let columns = vec![Column::new("name", "common.name", |r: &Row| CellValue::from(r.name)).sortable()];
        let sort = contracts::shared::table::SortConfig::ascending("name");
        let order = sorted_indices(&rows, &columns, Some(&sort));
        assert_eq!(total_pages(rows.len(), 2), 3);
        let page_two: Vec<&str> = page_range(rows.len(), 2, 2).map(|p| rows[order[p]].id).collect();
        assert_eq!(page_two, vec!["3", "2"]);
    }
}
