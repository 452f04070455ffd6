use chrono::{NaiveDate, NaiveDateTime};

/// Дата для моковых данных; некорректная дата становится 1970-01-01.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn date_time(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, 0, 0).unwrap_or_default()
}
