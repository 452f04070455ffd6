pub mod components;
pub mod date_utils;
pub mod i18n;
pub mod icons;
pub mod list_utils;
pub mod mock_api;
pub mod navigator;
pub mod page_frame;
pub mod page_standard;
pub mod query_state;
