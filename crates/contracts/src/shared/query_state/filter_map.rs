use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Выбранные значения фасетов: ключ фасета -> значения в порядке добавления.
///
/// Инвариант: ключ присутствует только если у него есть хотя бы одно значение.
/// Пустые строки и повторы внутри одного ключа не хранятся.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterMap(BTreeMap<String, Vec<String>>);

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.0
            .get(key)
            .map(|values| values.iter().any(|v| v == value))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of facet keys with a selection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of selected values across all keys (для бейджа фильтров).
    pub fn selected_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Appends values under `key`, skipping empties and duplicates.
    pub fn extend<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.0.entry(key.to_string()).or_default();
        for value in values {
            let value = value.into();
            if !value.is_empty() && !entry.contains(&value) {
                entry.push(value);
            }
        }
        if entry.is_empty() {
            self.0.remove(key);
        }
    }

    /// Мультивыбор: удаляет значение, если оно уже выбрано, иначе добавляет в конец.
    pub fn toggle(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        match self.0.get_mut(key) {
            Some(values) => {
                if let Some(pos) = values.iter().position(|v| v == value) {
                    values.remove(pos);
                    if values.is_empty() {
                        self.0.remove(key);
                    }
                } else {
                    values.push(value.to_string());
                }
            }
            None => {
                self.0.insert(key.to_string(), vec![value.to_string()]);
            }
        }
    }

    /// Одиночный выбор: повторный выбор того же значения снимает фильтр,
    /// другое значение заменяет текущее.
    pub fn replace(&mut self, key: &str, value: &str) {
        if value.is_empty() || self.get(key) == Some(&[value.to_string()][..]) {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), vec![value.to_string()]);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.remove(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> FilterMap {
        let mut m = FilterMap::new();
        for (k, vs) in entries {
            m.extend(k, vs.iter().copied());
        }
        m
    }

    #[test]
    fn test_toggle_appends_and_removes() {
        let mut m = map(&[("color", &["red"])]);
        m.toggle("color", "blue");
        assert_eq!(m, map(&[("color", &["red", "blue"])]));
        m.toggle("color", "red");
        assert_eq!(m, map(&[("color", &["blue"])]));
    }

    #[test]
    fn test_toggle_last_value_drops_key() {
        let mut m = map(&[("size", &["m"])]);
        m.toggle("size", "m");
        assert!(m.get("size").is_none());
        assert!(m.is_empty());
    }

    #[test]
    fn test_replace_is_single_select() {
        let mut m = FilterMap::new();
        m.replace("brand", "acme");
        m.replace("brand", "zen");
        assert_eq!(m.get("brand"), Some(&["zen".to_string()][..]));
        m.replace("brand", "zen");
        assert!(m.get("brand").is_none());
    }

    #[test]
    fn test_extend_skips_empty_and_duplicates() {
        let m = map(&[("color", &["red", "", "red", "blue"]), ("size", &[""])]);
        assert_eq!(m.get("color").map(<[String]>::len), Some(2));
        assert!(m.get("size").is_none());
        assert_eq!(m.selected_count(), 2);
    }
}
