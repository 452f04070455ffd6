pub mod config;
pub mod i18n;
pub mod list_filter;
pub mod query_state;
pub mod table;
