use thiserror::Error;

/// Ошибки разбора query-параметров.
///
/// UI никогда не падает на них: `PageNumber::from_param` откатывается на первую страницу.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("page parameter is not a number: {0:?}")]
    PageNotANumber(String),
    #[error("page parameter is out of range: {0}")]
    PageOutOfRange(i64),
}
