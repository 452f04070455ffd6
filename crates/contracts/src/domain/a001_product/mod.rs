pub mod aggregate;
pub mod mock;
pub mod search;

pub use aggregate::{Product, ProductStatus};
pub use mock::{category_tree, mock_products, CategoryNode};
pub use search::{search_products, sort_options, storefront_facets, SortOption};
