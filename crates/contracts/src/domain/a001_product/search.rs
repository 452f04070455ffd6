//! Поиск по витрине: категория из пути, `q`, фасеты и сортировка.

use super::aggregate::{Product, ProductStatus};
use crate::shared::list_filter::Searchable;
use crate::shared::query_state::{FacetDescriptor, FacetKind, FacetOption, QueryState, DEFAULT_SORT};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Вариант сортировки для выпадающего списка.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub id: &'static str,
    pub label: &'static str,
}

const SORT_OPTIONS: &[SortOption] = &[
    SortOption { id: DEFAULT_SORT, label: "sort.recommended" },
    SortOption { id: "price_asc", label: "sort.price_asc" },
    SortOption { id: "price_desc", label: "sort.price_desc" },
    SortOption { id: "newest", label: "sort.newest" },
    SortOption { id: "rating", label: "sort.rating" },
];

pub fn sort_options() -> &'static [SortOption] {
    SORT_OPTIONS
}

const PRICE_RANGES: [&str; 3] = ["0-100", "100-500", "500+"];

/// Фасеты витрины. Бренд — одиночный выбор, остальное — мультивыбор.
pub fn storefront_facets(products: &[Product]) -> Vec<FacetDescriptor> {
    let distinct = |field: fn(&Product) -> &str| -> BTreeSet<String> {
        products.iter().map(|p| field(p).to_string()).collect()
    };

    let brands = distinct(|p| p.brand.as_str())
        .into_iter()
        .map(|b| FacetOption::new(b.clone(), b))
        .collect();
    let colors = distinct(|p| p.color.as_str())
        .into_iter()
        .map(|c| FacetOption::new(c.clone(), format!("color.{}", c)))
        .collect();
    let sizes = distinct(|p| p.size.as_str())
        .into_iter()
        .map(|s| FacetOption::new(s.clone(), s.to_uppercase()))
        .collect();
    let prices = PRICE_RANGES
        .iter()
        .map(|r| FacetOption::new(*r, format!("price.{}", r)))
        .collect();

    vec![
        FacetDescriptor::new("brand", FacetKind::Single, "facet.brand").with_options(brands),
        FacetDescriptor::new("color", FacetKind::Multi, "facet.color").with_options(colors),
        FacetDescriptor::new("size", FacetKind::Multi, "facet.size").with_options(sizes),
        FacetDescriptor::new("price", FacetKind::Multi, "facet.price").with_options(prices),
    ]
}

/// `"100-500"` -> [100, 500), `"500+"` -> [500, inf). Unparsable ranges match nothing.
fn price_in_range(price: f64, range: &str) -> bool {
    if let Some(min) = range.strip_suffix('+') {
        return min.trim().parse::<f64>().map(|min| price >= min).unwrap_or(false);
    }
    match range.split_once('-') {
        Some((min, max)) => match (min.trim().parse::<f64>(), max.trim().parse::<f64>()) {
            (Ok(min), Ok(max)) => price >= min && price < max,
            _ => false,
        },
        None => false,
    }
}

fn matches_facets(product: &Product, state: &QueryState) -> bool {
    state.filters.iter().all(|(key, values)| match key {
        "price" => values.iter().any(|r| price_in_range(product.price, r)),
        _ => product
            .get_field_value(key)
            .map(|v| values.iter().any(|selected| *selected == v))
            .unwrap_or(false),
    })
}

/// Фильтрует и сортирует активные товары по состоянию страницы поиска.
/// `recommended` и неизвестные сортировки сохраняют порядок каталога.
pub fn search_products<'a>(products: &'a [Product], state: &QueryState) -> Vec<&'a Product> {
    let mut found: Vec<&Product> = products
        .iter()
        .filter(|p| p.status == ProductStatus::Active)
        .filter(|p| p.in_category(&state.category_path))
        .filter(|p| state.q.as_deref().map(|q| p.matches_filter(q)).unwrap_or(true))
        .filter(|p| matches_facets(p, state))
        .collect();

    let by_price = |a: &&Product, b: &&Product| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
    match state.current_sort(DEFAULT_SORT) {
        "price_asc" => found.sort_by(by_price),
        "price_desc" => found.sort_by(|a, b| by_price(b, a)),
        "newest" => found.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        "rating" => found.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)),
        _ => {}
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock_products;

    fn search(url: &str) -> Vec<String> {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let state = QueryState::from_url(path, query);
        search_products(&mock_products(), &state)
            .into_iter()
            .map(|p| p.id.clone())
            .collect()
    }

    #[test]
    fn test_category_prefix() {
        assert_eq!(search("/search/electronics/audio/headphones"), vec!["p-011", "p-012", "p-013"]);
        assert_eq!(search("/search/electronics/audio").len(), 4);
    }

    #[test]
    fn test_inactive_products_hidden() {
        let all = search("/search");
        assert!(!all.contains(&"p-006".to_string()));
        assert!(!all.contains(&"p-010".to_string()));
        assert_eq!(all.len(), 21);
    }

    #[test]
    fn test_facets_and_price_ranges() {
        assert_eq!(search("/search/fashion?color=red"), vec!["p-007", "p-009"]);
        assert_eq!(search("/search/home?price=0-100,500%2B"), vec!["p-020", "p-024"]);
        assert_eq!(search("/search?brand=Sonix&sort=price_asc"), vec!["p-012", "p-011"]);
    }

    #[test]
    fn test_query_matches_both_languages() {
        assert_eq!(search("/search?q=sneakers"), vec!["p-002"]);
        assert_eq!(search("/search?q=%D9%85%D9%82%D9%84%D8%A7%D8%A9"), vec!["p-019"]);
    }

    #[test]
    fn test_sorts() {
        let newest = search("/search/electronics?sort=newest");
        assert_eq!(newest.first().map(String::as_str), Some("p-012"));
        let rating = search("/search/electronics?sort=rating");
        assert_eq!(rating.first().map(String::as_str), Some("p-013"));
        let unknown = search("/search/home/kitchen?sort=bogus");
        assert_eq!(unknown, vec!["p-018", "p-019", "p-020", "p-024"]);
    }

    #[test]
    fn test_price_range_parsing() {
        assert!(price_in_range(100.0, "100-500"));
        assert!(!price_in_range(500.0, "100-500"));
        assert!(price_in_range(500.0, "500+"));
        assert!(!price_in_range(10.0, "cheap"));
    }

    #[test]
    fn test_facet_descriptors() {
        let facets = storefront_facets(&mock_products());
        let brand = facets.iter().find(|f| f.key == "brand").unwrap();
        assert_eq!(brand.kind, FacetKind::Single);
        assert!(brand.options.iter().any(|o| o.value == "Sonix"));
        let price = facets.iter().find(|f| f.key == "price").unwrap();
        assert_eq!(price.options.len(), 3);
    }
}
