use crate::domain::common::date;
use crate::shared::list_filter::{contains_ignore_case, Searchable};
use crate::shared::table::TableRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Таблица характеристик, привязанная к категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecTable {
    pub id: String,
    pub name: String,
    /// Category slug path joined with `/`.
    pub category: String,
    pub rows: Vec<SpecRow>,
    pub updated_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRow {
    pub label_en: String,
    pub label_ar: String,
}

impl TableRow for SpecTable {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for SpecTable {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case([self.name.as_str(), self.category.as_str()], filter)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => self.category.split('/').next().map(str::to_string),
            _ => None,
        }
    }
}

fn rows(labels: &[(&str, &str)]) -> Vec<SpecRow> {
    labels
        .iter()
        .map(|(en, ar)| SpecRow {
            label_en: en.to_string(),
            label_ar: ar.to_string(),
        })
        .collect()
}

pub fn mock_spec_tables() -> Vec<SpecTable> {
    vec![
        SpecTable {
            id: "s-01".to_string(),
            name: "Headphones".to_string(),
            category: "electronics/audio/headphones".to_string(),
            rows: rows(&[("Driver size", "حجم السماعة"), ("Battery life", "عمر البطارية"), ("Connectivity", "الاتصال")]),
            updated_at: date(2024, 9, 3),
        },
        SpecTable {
            id: "s-02".to_string(),
            name: "Phones".to_string(),
            category: "electronics/phones".to_string(),
            rows: rows(&[("Screen", "الشاشة"), ("Storage", "السعة"), ("Camera", "الكاميرا"), ("Battery", "البطارية")]),
            updated_at: date(2024, 8, 14),
        },
        SpecTable {
            id: "s-03".to_string(),
            name: "Footwear".to_string(),
            category: "fashion/men/shoes".to_string(),
            rows: rows(&[("Material", "الخامة"), ("Sole", "النعل")]),
            updated_at: date(2024, 5, 27),
        },
        SpecTable {
            id: "s-04".to_string(),
            name: "Cookware".to_string(),
            category: "home/kitchen".to_string(),
            rows: rows(&[("Material", "الخامة"), ("Dishwasher safe", "آمن في غسالة الصحون")]),
            updated_at: date(2024, 2, 11),
        },
    ]
}
