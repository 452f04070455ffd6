//! Состояние фильтров, сортировки и пагинации страницы.
//!
//! `QueryState` — единственный источник истины; URL является его проекцией
//! (`QueryState::to_url`) и разбирается обратно через `QueryState::from_url`.
//! Все изменения проходят через `reduce`, запись в историю — через `apply`.

pub mod error;
pub mod facet;
pub mod filter_map;
pub mod navigator;
pub mod page;
pub mod query;
pub mod reducer;

pub use error::QueryError;
pub use facet::{FacetDescriptor, FacetKind, FacetOption};
pub use filter_map::FilterMap;
pub use navigator::{split_url, MemoryNavigator, Navigator};
pub use page::{parse_page, PageNumber};
pub use query::{QueryState, DEFAULT_SORT, RESERVED_KEYS, SEARCH_PATH};
pub use reducer::{apply, reduce, HistoryMode, QueryAction, QueryStore};
