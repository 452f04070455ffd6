/// Фильтрация списков админки по состоянию из URL (`q` и фасеты).
use super::query_state::QueryState;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;

    /// Возвращает значение поля фасета (например, `status`)
    fn get_field_value(&self, field: &str) -> Option<String>;
}

/// Case-insensitive substring match over several fields.
pub fn contains_ignore_case<'a>(fields: impl IntoIterator<Item = &'a str>, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Оставляет элементы, подходящие под `q` и все выбранные фасеты.
/// Внутри одного фасета значения объединяются по ИЛИ, между фасетами — по И.
pub fn filter_list<T: Searchable + Clone>(items: &[T], state: &QueryState) -> Vec<T> {
    items
        .iter()
        .filter(|item| {
            state
                .q
                .as_deref()
                .map(|q| item.matches_filter(q))
                .unwrap_or(true)
        })
        .filter(|item| {
            state.filters.iter().all(|(key, values)| {
                item.get_field_value(key)
                    .map(|v| values.iter().any(|selected| *selected == v))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        name: String,
        status: String,
    }

    impl Searchable for Tag {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case([self.name.as_str()], filter)
        }

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "status" => Some(self.status.clone()),
                _ => None,
            }
        }
    }

    fn tags() -> Vec<Tag> {
        [("Summer", "active"), ("Winter", "draft"), ("Sale", "active")]
            .into_iter()
            .map(|(n, s)| Tag {
                name: n.to_string(),
                status: s.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_filter_by_q_and_facet() {
        let state = QueryState::from_url("/admin/tags", "q=s&status=active");
        let names: Vec<String> = filter_list(&tags(), &state).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Summer", "Sale"]);
    }

    #[test]
    fn test_unknown_facet_excludes_everything() {
        let state = QueryState::from_url("/admin/tags", "color=red");
        assert!(filter_list(&tags(), &state).is_empty());
    }

    #[test]
    fn test_facet_values_are_or() {
        let state = QueryState::from_url("/admin/tags", "status=active,draft");
        assert_eq!(filter_list(&tags(), &state).len(), 3);
    }
}
