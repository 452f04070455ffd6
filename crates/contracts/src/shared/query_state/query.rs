use super::filter_map::FilterMap;
use super::page::PageNumber;
use serde::{Deserialize, Serialize};

/// Ключи с отдельными аксессорами; в `FilterMap` не попадают.
pub const RESERVED_KEYS: [&str; 3] = ["page", "sort", "q"];

/// Идентификатор сортировки по умолчанию.
pub const DEFAULT_SORT: &str = "recommended";

/// Путь страницы поиска; сегменты после него кодируют категорию.
pub const SEARCH_PATH: &str = "/search";

/// Maximum category depth: grandparent / parent / child.
pub const MAX_CATEGORY_DEPTH: usize = 3;

/// Состояние фильтров/сортировки/страницы, которое проецируется в URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryState {
    /// Путь без категорийных сегментов: `/search`, `/admin/products`, ...
    pub base_path: String,
    /// Only populated under `SEARCH_PATH`.
    pub category_path: Vec<String>,
    pub filters: FilterMap,
    pub sort: Option<String>,
    pub page: Option<PageNumber>,
    pub q: Option<String>,
}

impl QueryState {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    /// Разбирает путь и query-строку (с `?` или без).
    pub fn from_url(path: &str, query: &str) -> Self {
        let (base_path, category_path) = split_category_path(path);
        let mut state = Self {
            base_path,
            category_path,
            ..Self::default()
        };

        for (key, raw_value) in raw_pairs(query) {
            match key.as_str() {
                "page" => state.page = Some(PageNumber::from_param(Some(&decode(raw_value)))),
                "sort" => state.sort = Some(decode(raw_value)).filter(|s| !s.is_empty()),
                "q" => state.q = Some(decode(raw_value)).filter(|s| !s.is_empty()),
                _ => state.filters.extend(&key, raw_value.split(',').map(decode)),
            }
        }
        state
    }

    pub fn current_page(&self) -> PageNumber {
        self.page.unwrap_or_default()
    }

    /// Активная сортировка или `default`, если параметр отсутствует.
    pub fn current_sort<'a>(&'a self, default: &'a str) -> &'a str {
        self.sort.as_deref().unwrap_or(default)
    }

    pub fn is_search(&self) -> bool {
        self.base_path == SEARCH_PATH
    }

    /// Path including encoded category segments.
    pub fn path(&self) -> String {
        let mut path = if self.base_path.is_empty() {
            "/".to_string()
        } else {
            self.base_path.clone()
        };
        for segment in &self.category_path {
            if !path.ends_with('/') {
                path.push('/');
            }
            path.push_str(&urlencoding::encode(segment));
        }
        path
    }

    /// Query-строка без `?`. Порядок ключей детерминирован: q, фасеты, sort, page.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(format!("q={}", urlencoding::encode(q)));
        }
        for (key, values) in self.filters.iter() {
            let joined = values
                .iter()
                .map(|v| urlencoding::encode(v).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(format!("{}={}", urlencoding::encode(key), joined));
        }
        if let Some(sort) = &self.sort {
            pairs.push(format!("sort={}", urlencoding::encode(sort)));
        }
        if let Some(page) = self.page {
            pairs.push(format!("page={}", page));
        }
        pairs.join("&")
    }

    pub fn to_url(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            self.path()
        } else {
            format!("{}?{}", self.path(), query)
        }
    }
}

fn split_category_path(path: &str) -> (String, Vec<String>) {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed == SEARCH_PATH || trimmed.starts_with("/search/") {
        let segments = trimmed[SEARCH_PATH.len()..]
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode)
            .take(MAX_CATEGORY_DEPTH)
            .collect();
        (SEARCH_PATH.to_string(), segments)
    } else if trimmed.is_empty() {
        ("/".to_string(), Vec::new())
    } else {
        (trimmed.to_string(), Vec::new())
    }
}

/// Пары `key=value` в сыром виде (ключ уже декодирован, значение — нет).
fn raw_pairs(query: &str) -> impl Iterator<Item = (String, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), value)
        })
        .filter(|(key, _)| !key.is_empty())
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_exclude_reserved_keys() {
        let state = QueryState::from_url("/search", "?q=shoe&page=2&sort=price_asc&color=red,blue&size=m");
        assert_eq!(state.q.as_deref(), Some("shoe"));
        assert_eq!(state.current_page().get(), 2);
        assert_eq!(state.sort.as_deref(), Some("price_asc"));
        assert_eq!(
            state.filters.get("color"),
            Some(&["red".to_string(), "blue".to_string()][..])
        );
        assert_eq!(state.filters.get("size"), Some(&["m".to_string()][..]));
        for reserved in RESERVED_KEYS {
            assert!(state.filters.get(reserved).is_none());
        }
    }

    #[test]
    fn test_category_path_from_search_segments() {
        let state = QueryState::from_url("/search/fashion/men/shoes", "");
        assert_eq!(state.base_path, SEARCH_PATH);
        assert_eq!(state.category_path, vec!["fashion", "men", "shoes"]);
        assert_eq!(state.path(), "/search/fashion/men/shoes");
    }

    #[test]
    fn test_non_search_path_has_no_categories() {
        let state = QueryState::from_url("/admin/products/", "status=active");
        assert_eq!(state.base_path, "/admin/products");
        assert!(state.category_path.is_empty());
        assert_eq!(state.to_url(), "/admin/products?status=active");
    }

    #[test]
    fn test_malformed_page_defaults_to_first() {
        let state = QueryState::from_url("/search", "page=abc");
        assert_eq!(state.current_page().get(), 1);
    }

    #[test]
    fn test_current_sort_default() {
        let state = QueryState::from_url("/search", "");
        assert_eq!(state.current_sort(DEFAULT_SORT), "recommended");
    }

    #[test]
    fn test_to_url_encodes_values() {
        let mut state = QueryState::new(SEARCH_PATH);
        state.q = Some("red dress".to_string());
        state.filters.extend("brand", ["A,B", "C&D"]);
        state.category_path = vec!["home & garden".to_string()];
        let url = state.to_url();
        assert_eq!(url, "/search/home%20%26%20garden?q=red%20dress&brand=A%2CB,C%26D");
        let (path, query) = url.split_once('?').unwrap();
        assert_eq!(QueryState::from_url(path, query), state);
    }

    #[test]
    fn test_plus_is_space_and_arabic_roundtrips() {
        let state = QueryState::from_url("/search", "q=%D8%AD%D8%B0%D8%A7%D8%A1+%D8%B1%D9%8A%D8%A7%D8%B6%D9%8A");
        assert_eq!(state.q.as_deref(), Some("حذاء رياضي"));
    }
}
