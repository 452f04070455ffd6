/// Utilities for date and time formatting in table cells
///
/// ISO order keeps text comparison chronological, so the same string
/// is used for display and for column sorting.
use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::table::CellValue;

/// Example: 2024-03-15 -> "2024-03-15"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Example: 2024-03-15 14:02:26 -> "2024-03-15 14:02"
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

pub fn date_cell(date: NaiveDate) -> CellValue {
    CellValue::Text(format_date(date))
}

pub fn datetime_cell(datetime: NaiveDateTime) -> CellValue {
    CellValue::Text(format_datetime(datetime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::{date, date_time};
    use contracts::shared::table::compare_cell_values;
    use std::cmp::Ordering;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(format_datetime(date_time(2024, 3, 15, 14)), "2024-03-15 14:00");
    }

    #[test]
    fn test_date_cells_sort_chronologically() {
        let earlier = date_cell(date(2024, 2, 28));
        let later = date_cell(date(2024, 10, 1));
        assert_eq!(compare_cell_values(&earlier, &later), Ordering::Less);
    }
}
