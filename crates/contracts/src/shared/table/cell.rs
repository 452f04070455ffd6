use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Типизированное значение ячейки, которое возвращает аксессор колонки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Number(n) => write!(f, "{:.2}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Empty => Ok(()),
        }
    }
}

/// Компаратор по умолчанию.
///
/// Текст сравнивается без учёта регистра (при равенстве — посимвольно),
/// числа — через `partial_cmp`. Несравнимые пары (NaN, разные типы, пустые) равны,
/// поэтому стабильная сортировка сохраняет их исходный порядок.
pub fn compare_cell_values(a: &CellValue, b: &CellValue) -> Ordering {
    use CellValue::*;
    match (a, b) {
        (Text(x), Text(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        (Integer(x), Integer(y)) => x.cmp(y),
        (Number(x), Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Integer(x), Number(y)) => (*x as f64).partial_cmp(y).unwrap_or(Ordering::Equal),
        (Number(x), Integer(y)) => x.partial_cmp(&(*y as f64)).unwrap_or(Ordering::Equal),
        (Bool(x), Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_case_insensitive() {
        assert_eq!(
            compare_cell_values(&"apple".into(), &"Banana".into()),
            Ordering::Less
        );
        assert_eq!(
            compare_cell_values(&"b".into(), &"B".into()),
            Ordering::Greater
        );
    }

    #[test]
    fn test_numbers_and_mixed() {
        assert_eq!(
            compare_cell_values(&CellValue::Integer(2), &CellValue::Number(2.5)),
            Ordering::Less
        );
        assert_eq!(
            compare_cell_values(&CellValue::Number(f64::NAN), &CellValue::Number(1.0)),
            Ordering::Equal
        );
        assert_eq!(
            compare_cell_values(&CellValue::Empty, &"x".into()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(3.5).to_string(), "3.50");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from(None::<i64>), CellValue::Empty);
    }
}
