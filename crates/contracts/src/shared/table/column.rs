use super::cell::{compare_cell_values, CellValue};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Описание колонки. `key` — идентификатор сортировки, значение берётся
/// типизированным аксессором, а не поиском поля по имени.
pub struct Column<T> {
    pub key: String,
    /// Message id in the catalog, or literal header text.
    pub header: String,
    pub width: Option<f64>,
    pub min_width: f64,
    pub align: Align,
    pub sortable: bool,
    accessor: Accessor<T>,
    comparator: Option<Comparator<T>>,
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            min_width: 100.0,
            align: Align::Left,
            sortable: false,
            accessor: Arc::new(accessor),
            comparator: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_comparator(
        mut self,
        comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Uses the custom comparator when set, otherwise compares accessor values.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.comparator {
            Some(cmp) => cmp(a, b),
            None => compare_cell_values(&self.value(a), &self.value(b)),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            width: self.width,
            min_width: self.min_width,
            align: self.align,
            sortable: self.sortable,
            accessor: Arc::clone(&self.accessor),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("custom_comparator", &self.comparator.is_some())
            .finish()
    }
}
