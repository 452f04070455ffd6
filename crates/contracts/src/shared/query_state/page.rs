use super::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Номер страницы, начиная с 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Same as `new`, but 0 becomes the first page.
    pub fn saturating(value: u32) -> Self {
        Self::new(value).unwrap_or(Self::FIRST)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based index for slicing.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Fail-soft parse of the raw `page` parameter: anything invalid is page 1.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(parse_page) {
            Some(Ok(page)) => page,
            Some(Err(e)) => {
                log::debug!("ignoring page parameter: {}", e);
                Self::FIRST
            }
            None => Self::FIRST,
        }
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Строгий разбор параметра `page`.
pub fn parse_page(raw: &str) -> Result<PageNumber, QueryError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| QueryError::PageNotANumber(raw.to_string()))?;
    if value < 1 || value > i64::from(u32::MAX) {
        return Err(QueryError::PageOutOfRange(value));
    }
    PageNumber::new(value as u32).ok_or(QueryError::PageOutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_valid() {
        assert_eq!(parse_page("3").map(PageNumber::get), Ok(3));
        assert_eq!(parse_page(" 12 ").map(PageNumber::get), Ok(12));
    }

    #[test]
    fn test_parse_page_errors() {
        assert_eq!(
            parse_page("abc"),
            Err(QueryError::PageNotANumber("abc".to_string()))
        );
        assert_eq!(parse_page("2.5"), Err(QueryError::PageNotANumber("2.5".to_string())));
        assert_eq!(parse_page("0"), Err(QueryError::PageOutOfRange(0)));
        assert_eq!(parse_page("-4"), Err(QueryError::PageOutOfRange(-4)));
        assert_eq!(
            parse_page("99999999999"),
            Err(QueryError::PageOutOfRange(99_999_999_999))
        );
    }

    #[test]
    fn test_from_param_falls_back_to_first() {
        assert_eq!(PageNumber::from_param(None).get(), 1);
        assert_eq!(PageNumber::from_param(Some("x")).get(), 1);
        assert_eq!(PageNumber::from_param(Some("-1")).get(), 1);
        assert_eq!(PageNumber::from_param(Some("7")).get(), 7);
    }

    #[test]
    fn test_index_is_zero_based() {
        assert_eq!(PageNumber::FIRST.index(), 0);
        assert_eq!(PageNumber::saturating(0), PageNumber::FIRST);
        assert_eq!(PageNumber::saturating(4).index(), 3);
    }
}
