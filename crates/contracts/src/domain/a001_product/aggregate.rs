use crate::domain::common::status_enum;
use crate::shared::i18n::Locale;
use crate::shared::list_filter::{contains_ignore_case, Searchable};
use crate::shared::table::TableRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum! {
    /// Статус товара в админке
    pub enum ProductStatus { Active => "active", Draft => "draft", Archived => "archived" }
}

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    /// Slugs from root to leaf, e.g. `["fashion", "men", "shoes"]`
    pub category_path: Vec<String>,
    pub brand: String,
    pub color: String,
    pub size: String,
    pub price: f64,
    pub rating: f64,
    pub stock: i64,
    pub created_at: NaiveDate,
    pub status: ProductStatus,
}

impl Product {
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.name_en,
            Locale::Ar => &self.name_ar,
        }
    }

    pub fn in_category(&self, path: &[String]) -> bool {
        self.category_path.starts_with(path)
    }
}

impl TableRow for Product {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(
            [self.name_en.as_str(), self.name_ar.as_str(), self.brand.as_str()],
            filter,
        )
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            "brand" => Some(self.brand.clone()),
            "color" => Some(self.color.clone()),
            "size" => Some(self.size.clone()),
            _ => None,
        }
    }
}
