use crate::domain::common::{date, status_enum};
use crate::shared::list_filter::{contains_ignore_case, Searchable};
use crate::shared::table::TableRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

status_enum! {
    pub enum ReturnStatus { Requested => "requested", Approved => "approved", Rejected => "rejected", Refunded => "refunded" }
}

/// Заявка на возврат
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub id: String,
    pub order_no: String,
    pub customer: String,
    pub product_name: String,
    pub reason: String,
    pub amount: f64,
    pub status: ReturnStatus,
    pub created_at: NaiveDate,
}

impl ReturnRequest {
    /// Возврат денег возможен только по одобренной заявке.
    pub fn can_refund(&self) -> bool {
        self.status == ReturnStatus::Approved
    }

    pub fn is_open(&self) -> bool {
        self.status == ReturnStatus::Requested
    }
}

impl TableRow for ReturnRequest {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for ReturnRequest {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(
            [self.order_no.as_str(), self.customer.as_str(), self.product_name.as_str()],
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

pub fn mock_returns() -> Vec<ReturnRequest> {
    [
        ("ret-1001", "SO-48211", "Omar K.", "Canvas Sneakers", "Wrong size", 189.0, ReturnStatus::Requested, date(2024, 10, 8)),
        ("ret-1002", "SO-48190", "Sara M.", "Wireless Headphones", "Defective", 899.0, ReturnStatus::Approved, date(2024, 10, 5)),
        ("ret-1003", "SO-47702", "Maya R.", "Tote Bag", "Changed mind", 199.0, ReturnStatus::Rejected, date(2024, 9, 21)),
        ("ret-1004", "SO-47655", "Ziad N.", "Phone Case", "Not as described", 49.0, ReturnStatus::Refunded, date(2024, 9, 18)),
        ("ret-1005", "SO-48302", "Huda F.", "Ceramic Mug Set", "Arrived broken", 89.0, ReturnStatus::Requested, date(2024, 10, 12)),
        ("ret-1006", "SO-48277", "Fadi L.", "Smartphone Lite", "Defective", 1299.0, ReturnStatus::Approved, date(2024, 10, 10)),
    ]
    .into_iter()
    .map(|(id, order_no, customer, product_name, reason, amount, status, created_at)| ReturnRequest {
        id: id.to_string(),
        order_no: order_no.to_string(),
        customer: customer.to_string(),
        product_name: product_name.to_string(),
        reason: reason.to_string(),
        amount,
        status,
        created_at,
    })
    .collect()
}
