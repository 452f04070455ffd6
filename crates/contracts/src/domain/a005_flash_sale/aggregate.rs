use crate::domain::common::{date_time, status_enum};
use crate::shared::list_filter::{contains_ignore_case, Searchable};
use crate::shared::table::TableRow;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

status_enum! {
    /// Статус акции вычисляется по текущему времени
    pub enum FlashSaleStatus { Scheduled => "scheduled", Active => "active", Ended => "ended" }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashSale {
    pub id: String,
    pub title_en: String,
    pub title_ar: String,
    pub discount_percent: u32,
    pub products_count: i64,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

impl FlashSale {
    /// `starts_at` inclusive, `ends_at` exclusive.
    pub fn status_at(&self, now: NaiveDateTime) -> FlashSaleStatus {
        if now < self.starts_at {
            FlashSaleStatus::Scheduled
        } else if now < self.ends_at {
            FlashSaleStatus::Active
        } else {
            FlashSaleStatus::Ended
        }
    }

    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        self.status_at(now) == FlashSaleStatus::Active
    }

    pub fn discounted_price(&self, price: f64) -> f64 {
        let percent = f64::from(self.discount_percent.min(100));
        (price * (100.0 - percent) / 100.0 * 100.0).round() / 100.0
    }
}

impl TableRow for FlashSale {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for FlashSale {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case([self.title_en.as_str(), self.title_ar.as_str()], filter)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(
                self.status_at(chrono::Local::now().naive_local())
                    .code()
                    .to_string(),
            ),
            _ => None,
        }
    }
}

pub fn mock_flash_sales() -> Vec<FlashSale> {
    [
        ("f-01", "White Friday", "الجمعة البيضاء", 40, 120, date_time(2024, 11, 29, 0), date_time(2024, 12, 2, 0)),
        ("f-02", "Weekend audio deals", "عروض الصوتيات", 25, 14, date_time(2024, 10, 18, 9), date_time(2024, 10, 20, 23)),
        ("f-03", "Kitchen week", "أسبوع المطبخ", 15, 30, date_time(2026, 10, 10, 0), date_time(2026, 10, 24, 0)),
        ("f-04", "New year sale", "تخفيضات العام الجديد", 30, 80, date_time(2026, 12, 31, 0), date_time(2027, 1, 3, 0)),
        ("f-05", "Back to school", "العودة للمدارس", 20, 45, date_time(2026, 8, 20, 0), date_time(2026, 9, 5, 0)),
    ]
    .into_iter()
    .map(|(id, title_en, title_ar, discount_percent, products_count, starts_at, ends_at)| FlashSale {
        id: id.to_string(),
        title_en: title_en.to_string(),
        title_ar: title_ar.to_string(),
        discount_percent,
        products_count,
        starts_at,
        ends_at,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        let sale = &mock_flash_sales()[1];
        assert_eq!(sale.status_at(date_time(2024, 10, 18, 8)), FlashSaleStatus::Scheduled);
        assert_eq!(sale.status_at(sale.starts_at), FlashSaleStatus::Active);
        assert!(!sale.is_active_at(sale.ends_at));
        assert_eq!(sale.status_at(sale.ends_at), FlashSaleStatus::Ended);
    }

    #[test]
    fn test_discounted_price() {
        let sale = &mock_flash_sales()[0];
        assert_eq!(sale.discounted_price(349.0), 209.4);
        assert_eq!(sale.discounted_price(0.0), 0.0);
    }
}
