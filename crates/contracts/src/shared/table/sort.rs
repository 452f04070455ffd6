use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Активная сортировка таблицы (не более одной колонки).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Цикл по клику на заголовок: asc -> desc -> без сортировки.
/// Клик по другой колонке начинает с asc.
pub fn next_sort(current: Option<&SortConfig>, key: &str) -> Option<SortConfig> {
    match current {
        Some(c) if c.key == key => match c.direction {
            SortDirection::Ascending => Some(SortConfig::descending(key)),
            SortDirection::Descending => None,
        },
        _ => Some(SortConfig::ascending(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_state_cycle() {
        let first = next_sort(None, "name");
        assert_eq!(first, Some(SortConfig::ascending("name")));
        let second = next_sort(first.as_ref(), "name");
        assert_eq!(second, Some(SortConfig::descending("name")));
        assert_eq!(next_sort(second.as_ref(), "name"), None);
    }

    #[test]
    fn test_other_column_restarts() {
        let current = SortConfig::descending("name");
        assert_eq!(
            next_sort(Some(&current), "price"),
            Some(SortConfig::ascending("price"))
        );
    }
}
