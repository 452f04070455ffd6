use crate::domain::common::status_enum;
use crate::shared::list_filter::{contains_ignore_case, Searchable};
use crate::shared::table::TableRow;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum TagStatus { Active => "active", Draft => "draft" }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    pub slug: String,
    pub products_count: i64,
    pub status: TagStatus,
}

impl TableRow for Tag {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for Tag {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(
            [self.name_en.as_str(), self.name_ar.as_str(), self.slug.as_str()],
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

pub fn mock_tags() -> Vec<Tag> {
    [
        ("t-01", "New arrivals", "وصل حديثاً", "new-arrivals", 42, TagStatus::Active),
        ("t-02", "Best sellers", "الأكثر مبيعاً", "best-sellers", 18, TagStatus::Active),
        ("t-03", "Ramadan offers", "عروض رمضان", "ramadan-offers", 27, TagStatus::Draft),
        ("t-04", "Eco friendly", "صديق للبيئة", "eco-friendly", 9, TagStatus::Active),
        ("t-05", "Gift ideas", "أفكار هدايا", "gift-ideas", 33, TagStatus::Active),
        ("t-06", "Clearance", "تصفية", "clearance", 0, TagStatus::Draft),
        ("t-07", "Back to school", "العودة للمدارس", "back-to-school", 14, TagStatus::Active),
    ]
    .into_iter()
    .map(|(id, name_en, name_ar, slug, products_count, status)| Tag {
        id: id.to_string(),
        name_en: name_en.to_string(),
        name_ar: name_ar.to_string(),
        slug: slug.to_string(),
        products_count,
        status,
    })
    .collect()
}
