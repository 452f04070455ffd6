use crate::domain::common::{date, status_enum};
use crate::shared::list_filter::{contains_ignore_case, Searchable};
use crate::shared::table::TableRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum PageStatus { Published => "published", Draft => "draft" }
}

/// Статическая страница сайта (о нас, доставка, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title_en: String,
    pub title_ar: String,
    pub slug: String,
    pub status: PageStatus,
    pub updated_at: NaiveDate,
}

impl TableRow for Page {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for Page {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(
            [self.title_en.as_str(), self.title_ar.as_str(), self.slug.as_str()],
            filter,
        )
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

pub fn mock_pages() -> Vec<Page> {
    [
        ("pg-1", "About us", "من نحن", "about", PageStatus::Published, date(2024, 1, 10)),
        ("pg-2", "Shipping policy", "سياسة الشحن", "shipping", PageStatus::Published, date(2024, 6, 2)),
        ("pg-3", "Return policy", "سياسة الإرجاع", "returns", PageStatus::Published, date(2024, 6, 2)),
        ("pg-4", "Privacy policy", "سياسة الخصوصية", "privacy", PageStatus::Published, date(2023, 12, 1)),
        ("pg-5", "Careers", "الوظائف", "careers", PageStatus::Draft, date(2024, 9, 17)),
    ]
    .into_iter()
    .map(|(id, title_en, title_ar, slug, status, updated_at)| Page {
        id: id.to_string(),
        title_en: title_en.to_string(),
        title_ar: title_ar.to_string(),
        slug: slug.to_string(),
        status,
        updated_at,
    })
    .collect()
}
