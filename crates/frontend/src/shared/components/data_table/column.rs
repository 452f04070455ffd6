use contracts::shared::table::Column;
use leptos::prelude::*;
use std::sync::Arc;

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Колонка для `DataTable`: модель из `contracts` плюс необязательный рендер ячейки.
pub struct TableColumn<T> {
    pub column: Column<T>,
    render: Option<CellRenderer<T>>,
}

impl<T> TableColumn<T> {
    pub fn render(mut self, render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Содержимое ячейки: собственный рендер или текст значения аксессора.
    pub fn cell(&self, row: &T) -> AnyView {
        match &self.render {
            Some(render) => render(row),
            None => {
                let text = self.column.value(row).to_string();
                view! { <span>{text}</span> }.into_any()
            }
        }
    }
}

impl<T> From<Column<T>> for TableColumn<T> {
    fn from(column: Column<T>) -> Self {
        Self {
            column,
            render: None,
        }
    }
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            column: self.column.clone(),
            render: self.render.clone(),
        }
    }
}
