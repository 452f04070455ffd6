use crate::domain::common::{date, status_enum};
use crate::shared::list_filter::{contains_ignore_case, Searchable};
use crate::shared::table::TableRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum VendorStatus { Pending => "pending", Active => "active", Suspended => "suspended" }
}

/// Продавец маркетплейса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub products_count: i64,
    pub status: VendorStatus,
    pub joined_at: NaiveDate,
}

impl TableRow for Vendor {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for Vendor {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case([self.name.as_str(), self.email.as_str()], filter)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

pub fn mock_vendors() -> Vec<Vendor> {
    [
        ("v-01", "Vanta Footwear", "sales@vanta.example", 34, VendorStatus::Active, date(2022, 4, 12)),
        ("v-02", "Nomad Goods", "hello@nomad.example", 21, VendorStatus::Active, date(2022, 11, 3)),
        ("v-03", "Sonix Audio", "partners@sonix.example", 12, VendorStatus::Active, date(2023, 2, 17)),
        ("v-04", "Clay & Co", "shop@clay.example", 8, VendorStatus::Pending, date(2024, 9, 29)),
        ("v-05", "Forge Kitchen", "team@forge.example", 15, VendorStatus::Suspended, date(2023, 6, 8)),
        ("v-06", "Lumen Lighting", "info@lumen.example", 0, VendorStatus::Pending, date(2024, 10, 12)),
    ]
    .into_iter()
    .map(|(id, name, email, products_count, status, joined_at)| Vendor {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        products_count,
        status,
        joined_at,
    })
    .collect()
}
