pub mod a001_product;
pub mod a002_review;
pub mod a003_tag;
pub mod a004_vendor;
pub mod a005_flash_sale;
pub mod a006_return_request;
pub mod a007_spec_table;
pub mod a008_page;
pub mod common;
