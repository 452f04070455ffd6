//! Моковый каталог вместо бэкенда.

use super::aggregate::{Product, ProductStatus};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Узел дерева категорий для боковой панели поиска.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub slug: String,
    /// Message id: `category.<slug>`.
    pub label: String,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    fn new(slug: &str, children: Vec<CategoryNode>) -> Self {
        Self {
            slug: slug.to_string(),
            label: format!("category.{}", slug),
            children,
        }
    }

    fn leaf(slug: &str) -> Self {
        Self::new(slug, Vec::new())
    }
}

static CATEGORY_TREE: Lazy<Vec<CategoryNode>> = Lazy::new(|| {
    vec![
        CategoryNode::new(
            "fashion",
            vec![
                CategoryNode::new("men", vec![CategoryNode::leaf("shoes"), CategoryNode::leaf("bags")]),
                CategoryNode::new("women", vec![CategoryNode::leaf("shoes"), CategoryNode::leaf("bags")]),
            ],
        ),
        CategoryNode::new(
            "electronics",
            vec![
                CategoryNode::new("audio", vec![CategoryNode::leaf("headphones")]),
                CategoryNode::leaf("phones"),
            ],
        ),
        CategoryNode::new("home", vec![CategoryNode::leaf("kitchen")]),
    ]
});

pub fn category_tree() -> &'static [CategoryNode] {
    &CATEGORY_TREE
}

type Row = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str, f64, f64, i64, (i32, u32, u32), ProductStatus);

const PRODUCTS: &[Row] = &[
    ("p-001", "Leather Oxford Shoes", "حذاء أكسفورد جلد", "fashion/men/shoes", "Vanta", "black", "42", 349.0, 4.6, 25, (2024, 3, 2), ProductStatus::Active),
    ("p-002", "Canvas Sneakers", "حذاء رياضي قماش", "fashion/men/shoes", "Stride", "white", "43", 189.0, 4.2, 60, (2024, 5, 11), ProductStatus::Active),
    ("p-003", "Running Shoes Pro", "حذاء جري برو", "fashion/men/shoes", "Stride", "blue", "44", 520.0, 4.8, 14, (2024, 8, 20), ProductStatus::Active),
    ("p-004", "Messenger Bag", "حقيبة ساعي", "fashion/men/bags", "Nomad", "black", "m", 275.0, 4.1, 32, (2023, 11, 5), ProductStatus::Active),
    ("p-005", "Travel Backpack", "حقيبة ظهر للسفر", "fashion/men/bags", "Nomad", "green", "l", 410.0, 4.7, 18, (2024, 1, 19), ProductStatus::Active),
    ("p-006", "Suede Loafers", "حذاء لوفر شمواه", "fashion/men/shoes", "Vanta", "blue", "41", 299.0, 3.9, 0, (2023, 9, 1), ProductStatus::Archived),
    ("p-007", "Ballet Flats", "حذاء باليه", "fashion/women/shoes", "Lumi", "red", "38", 159.0, 4.3, 44, (2024, 4, 3), ProductStatus::Active),
    ("p-008", "Heeled Sandals", "صندل بكعب", "fashion/women/shoes", "Lumi", "black", "39", 239.0, 4.0, 27, (2024, 6, 14), ProductStatus::Active),
    ("p-009", "Tote Bag", "حقيبة يد كبيرة", "fashion/women/bags", "Nomad", "red", "l", 199.0, 4.5, 51, (2024, 2, 27), ProductStatus::Active),
    ("p-010", "Clutch Purse", "حقيبة سهرة", "fashion/women/bags", "Lumi", "white", "s", 129.0, 4.4, 23, (2024, 7, 8), ProductStatus::Draft),
    ("p-011", "Wireless Headphones", "سماعات لاسلكية", "electronics/audio/headphones", "Sonix", "black", "m", 899.0, 4.6, 12, (2024, 9, 30), ProductStatus::Active),
    ("p-012", "Noise Cancelling Earbuds", "سماعات أذن عازلة للضوضاء", "electronics/audio/headphones", "Sonix", "white", "s", 649.0, 4.4, 38, (2024, 10, 2), ProductStatus::Active),
    ("p-013", "Studio Monitor Headphones", "سماعات استوديو", "electronics/audio/headphones", "Arcade", "black", "l", 1199.0, 4.9, 6, (2024, 3, 15), ProductStatus::Active),
    ("p-014", "Bluetooth Speaker", "مكبر صوت بلوتوث", "electronics/audio", "Arcade", "blue", "m", 349.0, 4.2, 40, (2023, 12, 12), ProductStatus::Active),
    ("p-015", "Smartphone X2", "هاتف ذكي X2", "electronics/phones", "Orbit", "black", "m", 2499.0, 4.5, 20, (2024, 9, 1), ProductStatus::Active),
    ("p-016", "Smartphone Lite", "هاتف ذكي لايت", "electronics/phones", "Orbit", "green", "s", 1299.0, 4.0, 35, (2024, 2, 9), ProductStatus::Active),
    ("p-017", "Phone Case", "غطاء هاتف", "electronics/phones", "Orbit", "red", "s", 49.0, 3.8, 120, (2023, 10, 21), ProductStatus::Active),
    ("p-018", "Chef Knife", "سكين الطاهي", "home/kitchen", "Forge", "black", "m", 189.0, 4.8, 30, (2024, 5, 5), ProductStatus::Active),
    ("p-019", "Cast Iron Pan", "مقلاة حديد زهر", "home/kitchen", "Forge", "black", "l", 229.0, 4.7, 22, (2024, 1, 2), ProductStatus::Active),
    ("p-020", "Ceramic Mug Set", "طقم أكواب سيراميك", "home/kitchen", "Clay", "white", "m", 89.0, 4.1, 75, (2024, 8, 8), ProductStatus::Active),
    ("p-021", "Linen Napkins", "مناديل كتان", "home/kitchen", "Clay", "green", "s", 59.0, 3.6, 90, (2023, 8, 30), ProductStatus::Draft),
    ("p-022", "Wool Throw", "بطانية صوف", "home", "Clay", "red", "l", 310.0, 4.3, 15, (2024, 10, 10), ProductStatus::Active),
    ("p-023", "Desk Lamp", "مصباح مكتب", "home", "Lumen", "white", "m", 145.0, 4.0, 48, (2024, 4, 22), ProductStatus::Active),
    ("p-024", "Espresso Maker", "آلة إسبريسو", "home/kitchen", "Forge", "blue", "m", 740.0, 4.6, 9, (2024, 7, 19), ProductStatus::Active),
];

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    PRODUCTS
        .iter()
        .map(
            |&(id, name_en, name_ar, path, brand, color, size, price, rating, stock, (y, m, d), status)| Product {
                id: id.to_string(),
                name_en: name_en.to_string(),
                name_ar: name_ar.to_string(),
                category_path: path.split('/').map(str::to_string).collect(),
                brand: brand.to_string(),
                color: color.to_string(),
                size: size.to_string(),
                price,
                rating,
                stock,
                created_at: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                status,
            },
        )
        .collect()
});

pub fn mock_products() -> Vec<Product> {
    CATALOG.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_ids_unique() {
        let products = mock_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_every_product_category_exists_in_tree() {
        fn contains(nodes: &[CategoryNode], path: &[String]) -> bool {
            match path.split_first() {
                None => true,
                Some((head, rest)) => nodes
                    .iter()
                    .find(|n| &n.slug == head)
                    .map(|n| contains(&n.children, rest))
                    .unwrap_or(false),
            }
        }
        for product in mock_products() {
            assert!(contains(category_tree(), &product.category_path), "{}", product.id);
        }
    }
}
