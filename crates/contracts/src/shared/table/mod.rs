//! Модель универсальной таблицы без привязки к DOM: колонки, сортировка,
//! выбор строк, пагинация и меню действий.

pub mod action;
pub mod cell;
pub mod column;
pub mod model;
pub mod sort;

pub use action::{visible_actions, RowAction};
pub use cell::{compare_cell_values, CellValue};
pub use column::{Align, Column};
pub use model::{
    clamp_page, empty_row_colspan, page_range, page_window, pager_bounds, resolve_row_id,
    selected_rows, sorted_indices, total_pages, CheckState, TableOptions, TableRow, TableState,
};
pub use sort::{next_sort, SortConfig, SortDirection};
