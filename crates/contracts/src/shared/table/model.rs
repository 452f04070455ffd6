use super::column::Column;
use super::sort::{next_sort, SortConfig, SortDirection};
use std::collections::BTreeSet;
use std::ops::Range;

/// Строка таблицы с идентификатором для выбора (`rowIdKey` по умолчанию — `id`).
pub trait TableRow {
    fn row_id(&self) -> String;
}

/// Настройки экземпляра таблицы.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub pagination: bool,
    pub items_per_page: usize,
    pub selectable: bool,
    /// Column key used as row identity; `"id"` means `TableRow::row_id`.
    pub row_id_key: String,
    pub default_sort: Option<SortConfig>,
    pub empty_message: String,
    pub min_width: Option<f64>,
    pub class: Option<String>,
    pub header_class: Option<String>,
    pub row_class: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            pagination: true,
            items_per_page: 10,
            selectable: false,
            row_id_key: "id".to_string(),
            default_sort: None,
            empty_message: "table.empty".to_string(),
            min_width: None,
            class: None,
            header_class: None,
            row_class: None,
        }
    }
}

/// Состояние чекбокса в заголовке.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Эфемерное состояние таблицы: сортировка, страница (с 1), выбор, открытое меню.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sort: Option<SortConfig>,
    pub page: usize,
    pub selection: BTreeSet<String>,
    /// Display index of the row whose action menu is open.
    pub open_menu: Option<usize>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TableState {
    pub fn new(default_sort: Option<SortConfig>) -> Self {
        Self {
            sort: default_sort,
            page: 1,
            selection: BTreeSet::new(),
            open_menu: None,
        }
    }

    /// Следующее состояние цикла сортировки; сбрасывает пагинацию.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = next_sort(self.sort.as_ref(), key);
        self.page = 1;
        self.open_menu = None;
    }

    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| s.direction)
    }

    /// Clamps to `[1, total_pages]`; with no pages the table stays on page 1.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
        self.open_menu = None;
    }

    pub fn effective_page(&self, total_pages: usize) -> usize {
        clamp_page(self.page, total_pages)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn toggle_select(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Если выбраны все строки текущей страницы — снимает их, иначе выбирает все.
    /// Выбор на других страницах не меняется. Возвращает `true`, если набор изменился.
    pub fn select_all_on_page(&mut self, page_ids: &[String]) -> bool {
        if page_ids.is_empty() {
            return false;
        }
        if self.all_selected(page_ids) {
            for id in page_ids {
                self.selection.remove(id);
            }
        } else {
            for id in page_ids {
                self.selection.insert(id.clone());
            }
        }
        true
    }

    pub fn all_selected(&self, page_ids: &[String]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.selection.contains(id))
    }

    pub fn header_check_state(&self, page_ids: &[String]) -> CheckState {
        let selected = page_ids
            .iter()
            .filter(|id| self.selection.contains(*id))
            .count();
        if selected == 0 {
            CheckState::Unchecked
        } else if selected == page_ids.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Переключает строку и возвращает новый выбор в порядке отображения
    /// (то, что уходит в `on_selection_change`).
    pub fn toggle_select_rows<'a, T>(
        &mut self,
        id: &str,
        data: &'a [T],
        order: &[usize],
        id_of: impl Fn(&T) -> String,
    ) -> Vec<&'a T> {
        self.toggle_select(id);
        selected_rows(data, order, &self.selection, id_of)
    }

    /// Согласует состояние с новым набором строк.
    ///
    /// Ids that left the data are dropped from the selection. When the set of ids
    /// differs from `previous` (filter, search, deletion) the table returns to page 1;
    /// in-place row edits keep the page. Returns `true` if the selection changed.
    pub fn sync_with_data(&mut self, present: &BTreeSet<String>, previous: Option<&BTreeSet<String>>) -> bool {
        if previous.is_some_and(|prev| prev != present) {
            self.page = 1;
            self.open_menu = None;
        }
        let before = self.selection.len();
        self.selection.retain(|id| present.contains(id));
        self.selection.len() != before
    }

    /// Открывает меню строки (закрывая другое) или закрывает его при повторном клике.
    pub fn toggle_action_menu(&mut self, row_index: usize) {
        self.open_menu = if self.open_menu == Some(row_index) {
            None
        } else {
            Some(row_index)
        };
    }

    pub fn close_action_menu(&mut self) {
        self.open_menu = None;
    }
}

/// Индексы строк в порядке отображения. Сортировка стабильная: равные строки
/// сохраняют исходный порядок. Без сортировки (или с неизвестным ключом) порядок исходный.
pub fn sorted_indices<T>(data: &[T], columns: &[Column<T>], sort: Option<&SortConfig>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..data.len()).collect();
    let Some(sort) = sort else {
        return indices;
    };
    let Some(column) = columns.iter().find(|c| c.key == sort.key) else {
        return indices;
    };
    indices.sort_by(|&a, &b| {
        let ord = column.compare(&data[a], &data[b]);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    indices
}

pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    len.div_ceil(items_per_page)
}

/// Диапазон отображаемых позиций для страницы `page` (с 1).
pub fn page_range(len: usize, page: usize, items_per_page: usize) -> Range<usize> {
    if items_per_page == 0 {
        return 0..len;
    }
    let start = page.saturating_sub(1).saturating_mul(items_per_page).min(len);
    let end = start.saturating_add(items_per_page).min(len);
    start..end
}

/// Номера страниц для кнопок пагинации: окно `radius` вокруг текущей.
pub fn page_window(current: usize, total: usize, radius: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let first = current.saturating_sub(radius).max(1);
    let last = (current + radius).min(total);
    (first..=last).collect()
}

/// Приводит запрошенную страницу к `[1, total]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// `(at_start, at_end)`: First/Prev и Next/Last недоступны на границах.
pub fn pager_bounds(current: usize, total: usize) -> (bool, bool) {
    let total = total.max(1);
    (current <= 1, current >= total)
}

/// Ширина пустой строки: колонки данных плюс чекбокс и меню действий.
pub fn empty_row_colspan(columns: usize, selectable: bool, has_actions: bool) -> usize {
    columns + usize::from(selectable) + usize::from(has_actions)
}

/// Identity for selection: the `row_id_key` column value, or `TableRow::row_id`.
pub fn resolve_row_id<T: TableRow>(row: &T, columns: &[Column<T>], row_id_key: &str) -> String {
    if row_id_key != "id" {
        if let Some(column) = columns.iter().find(|c| c.key == row_id_key) {
            return column.value(row).to_string();
        }
    }
    row.row_id()
}

/// Выбранные строки в порядке отображения (после сортировки).
pub fn selected_rows<'a, T>(
    data: &'a [T],
    order: &[usize],
    selection: &BTreeSet<String>,
    id_of: impl Fn(&T) -> String,
) -> Vec<&'a T> {
    order
        .iter()
        .map(|&i| &data[i])
        .filter(|row| selection.contains(&id_of(row)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        price: f64,
    }

    impl TableRow for Row {
        fn row_id(&self) -> String {
            self.id.clone()
        }
    }

    fn row(id: &str, name: &str, price: f64) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name", |r: &Row| CellValue::text(&r.name)).sortable(),
            Column::new("price", "Price", |r: &Row| CellValue::Number(r.price)).sortable(),
        ]
    }

    fn names(data: &[Row], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| data[i].name.clone()).collect()
    }

    #[test]
    fn test_sort_cycle_scenario() {
        let data = vec![row("1", "B", 1.0), row("2", "A", 2.0)];
        let cols = columns();
        let mut state = TableState::default();

        state.toggle_sort("name");
        assert_eq!(names(&data, &sorted_indices(&data, &cols, state.sort.as_ref())), ["A", "B"]);
        state.toggle_sort("name");
        assert_eq!(names(&data, &sorted_indices(&data, &cols, state.sort.as_ref())), ["B", "A"]);
        state.toggle_sort("name");
        assert_eq!(sorted_indices(&data, &cols, state.sort.as_ref()), vec![0, 1]);
    }

    #[test]
    fn test_sort_resets_page() {
        let mut state = TableState::default();
        state.go_to_page(3, 5);
        state.toggle_sort("price");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_custom_comparator_wins() {
        let data = vec![row("1", "bb", 0.0), row("2", "a", 0.0), row("3", "ccc", 0.0)];
        let cols = vec![Column::new("name", "Name", |r: &Row| CellValue::text(&r.name))
            .sortable()
            .with_comparator(|a: &Row, b: &Row| a.name.len().cmp(&b.name.len()))];
        let order = sorted_indices(&data, &cols, Some(&SortConfig::descending("name")));
        assert_eq!(names(&data, &order), ["ccc", "bb", "a"]);
    }

    #[test]
    fn test_descending_keeps_ties_stable() {
        let data = vec![row("1", "x", 1.0), row("2", "y", 2.0), row("3", "z", 1.0)];
        let order = sorted_indices(&data, &columns(), Some(&SortConfig::descending("price")));
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_pagination_scenario() {
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(page_range(5, 2, 2), 2..4);
        assert_eq!(page_range(5, 3, 2), 4..5);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(page_range(0, 1, 10), 0..0);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = TableState::default();
        state.go_to_page(5, 3);
        assert_eq!(state.page, 3);
        state.go_to_page(0, 3);
        assert_eq!(state.page, 1);
        state.go_to_page(4, 0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(3, 3, 2), vec![1, 2, 3]);
        assert_eq!(page_window(5, 3, 2), vec![1, 2, 3]);
        assert_eq!(page_window(10, 20, 2), vec![8, 9, 10, 11, 12]);
        assert!(page_window(1, 0, 2).is_empty());
    }

    #[test]
    fn test_select_all_on_page_keeps_other_pages() {
        let mut state = TableState::default();
        state.toggle_select("9");
        let page_ids = vec!["1".to_string(), "2".to_string()];
        assert_eq!(state.header_check_state(&page_ids), CheckState::Unchecked);
        state.toggle_select("1");
        assert_eq!(state.header_check_state(&page_ids), CheckState::Indeterminate);

        assert!(state.select_all_on_page(&page_ids));
        assert!(state.all_selected(&page_ids));
        assert!(state.select_all_on_page(&page_ids));
        assert_eq!(state.selection.iter().collect::<Vec<_>>(), vec!["9"]);
        assert!(!state.select_all_on_page(&[]));
    }

    #[test]
    fn test_selected_rows_follow_sorted_order() {
        let data = vec![row("1", "B", 1.0), row("2", "A", 2.0), row("3", "C", 3.0)];
        let order = sorted_indices(&data, &columns(), Some(&SortConfig::ascending("name")));
        let mut state = TableState::default();
        state.toggle_select("1");
        state.toggle_select("2");
        let picked: Vec<&str> = selected_rows(&data, &order, &state.selection, |r| r.row_id())
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(picked, vec!["A", "B"]);
    }

    #[test]
    fn test_resolve_row_id_by_column() {
        let r = row("7", "Lamp", 3.0);
        let cols = columns();
        assert_eq!(resolve_row_id(&r, &cols, "id"), "7");
        assert_eq!(resolve_row_id(&r, &cols, "name"), "Lamp");
        assert_eq!(resolve_row_id(&r, &cols, "missing"), "7");
    }

    #[test]
    fn test_action_menu_single_open() {
        let mut state = TableState::default();
        state.toggle_action_menu(2);
        state.toggle_action_menu(4);
        assert_eq!(state.open_menu, Some(4));
        state.toggle_action_menu(4);
        assert_eq!(state.open_menu, None);
        state.toggle_action_menu(1);
        state.close_action_menu();
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn test_row_toggle_emits_complement() {
        let data = vec![row("1", "B", 1.0), row("2", "A", 2.0)];
        let order = sorted_indices(&data, &columns(), None);
        let mut state = TableState::default();
        state.toggle_select("2");

        let mut emitted: Vec<Vec<String>> = Vec::new();
        for _ in 0..2 {
            let rows = state.toggle_select_rows("1", &data, &order, |r| r.row_id());
            emitted.push(rows.into_iter().map(|r| r.id.clone()).collect());
        }
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0], vec!["1", "2"]);
        assert_eq!(emitted[1], vec!["2"]);
        assert_eq!(state.selection.iter().collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn test_pager_at_last_page() {
        // 3 страницы, стоим на последней: Next заблокирован, кнопки 5 нет
        assert_eq!(pager_bounds(3, 3), (false, true));
        assert_eq!(pager_bounds(1, 3), (true, false));
        assert_eq!(pager_bounds(1, 0), (true, true));
        assert!(!page_window(3, 3, 2).contains(&5));
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
    }

    #[test]
    fn test_empty_row_spans_every_column() {
        assert_eq!(empty_row_colspan(4, true, true), 6);
        assert_eq!(empty_row_colspan(4, false, true), 5);
        assert_eq!(empty_row_colspan(2, false, false), 2);
    }

    #[test]
    fn test_data_change_resets_page_and_prunes_selection() {
        let ids = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>();
        let mut state = TableState::default();
        state.go_to_page(2, 3);
        state.toggle_select("1");
        state.toggle_select("5");

        // первая загрузка: страницу не трогаем
        assert!(!state.sync_with_data(&ids(&["1", "5"]), None));
        assert_eq!(state.page, 2);

        // правка строки на месте: тот же набор id
        let all = ids(&["1", "2", "3", "4", "5"]);
        assert!(!state.sync_with_data(&all, Some(&all)));
        assert_eq!(state.page, 2);

        // фильтр сузил список
        assert!(state.sync_with_data(&ids(&["1", "2"]), Some(&all)));
        assert_eq!(state.page, 1);
        assert_eq!(state.selection.iter().collect::<Vec<_>>(), vec!["1"]);
    }
}
