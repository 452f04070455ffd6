use crate::domain::common::{date, status_enum};
use crate::shared::list_filter::{contains_ignore_case, Searchable};
use crate::shared::table::TableRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum ReviewStatus { Pending => "pending", Approved => "approved", Rejected => "rejected" }
}

/// Отзыв покупателя о товаре
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub customer: String,
    pub rating: u32,
    pub comment: String,
    pub status: ReviewStatus,
    pub created_at: NaiveDate,
}

impl TableRow for Review {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for Review {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(
            [self.product_name.as_str(), self.customer.as_str(), self.comment.as_str()],
            filter,
        )
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            "rating" => Some(self.rating.to_string()),
            _ => None,
        }
    }
}

pub fn mock_reviews() -> Vec<Review> {
    [
        ("r-01", "p-001", "Leather Oxford Shoes", "Omar K.", 5, "Great fit, very comfortable.", ReviewStatus::Approved, date(2024, 9, 2)),
        ("r-02", "p-011", "Wireless Headphones", "Sara M.", 4, "Battery life is excellent.", ReviewStatus::Approved, date(2024, 10, 4)),
        ("r-03", "p-011", "Wireless Headphones", "Lina A.", 2, "Left ear cup stopped working.", ReviewStatus::Pending, date(2024, 10, 7)),
        ("r-04", "p-015", "Smartphone X2", "Yusuf H.", 5, "Fast and the camera is superb.", ReviewStatus::Pending, date(2024, 10, 9)),
        ("r-05", "p-009", "Tote Bag", "Maya R.", 1, "Spam link removed by moderator.", ReviewStatus::Rejected, date(2024, 8, 15)),
        ("r-06", "p-019", "Cast Iron Pan", "Khaled S.", 5, "Heats evenly.", ReviewStatus::Approved, date(2024, 7, 1)),
        ("r-07", "p-024", "Espresso Maker", "Nour T.", 3, "Good coffee, loud pump.", ReviewStatus::Pending, date(2024, 10, 11)),
        ("r-08", "p-002", "Canvas Sneakers", "Adam B.", 4, "Runs a bit large.", ReviewStatus::Approved, date(2024, 6, 23)),
        ("r-09", "p-020", "Ceramic Mug Set", "Huda F.", 4, "Pretty glaze.", ReviewStatus::Pending, date(2024, 9, 28)),
        ("r-10", "p-013", "Studio Monitor Headphones", "Ziad N.", 5, "Flat response, great for mixing.", ReviewStatus::Approved, date(2024, 4, 2)),
        ("r-11", "p-007", "Ballet Flats", "Rana Q.", 3, "Cute but stiff at first.", ReviewStatus::Approved, date(2024, 5, 19)),
        ("r-12", "p-016", "Smartphone Lite", "Fadi L.", 2, "Screen scratches easily.", ReviewStatus::Pending, date(2024, 3, 30)),
    ]
    .into_iter()
    .map(|(id, product_id, product_name, customer, rating, comment, status, created_at)| Review {
        id: id.to_string(),
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        customer: customer.to_string(),
        rating,
        comment: comment.to_string(),
        status,
        created_at,
    })
    .collect()
}
