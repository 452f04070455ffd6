pub mod mock_date;
pub mod status;

pub use mock_date::{date, date_time};
pub(crate) use status::status_enum;
