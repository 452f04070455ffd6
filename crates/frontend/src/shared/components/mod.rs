pub mod admin_list;
pub mod badge;
pub mod data_table;
pub mod filter_panel;
pub mod pagination_controls;
pub mod table;

pub use admin_list::{remove_row, update_row, AdminListPage};
pub use badge::{Badge, StatusBadge};
pub use data_table::{DataTable, TableColumn};
pub use filter_panel::{ActiveFilterTags, FacetGroup, FilterPanel, FilterTag};
pub use pagination_controls::PaginationControls;
