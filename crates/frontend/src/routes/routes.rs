use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_review::ui::list::ReviewList;
use crate::domain::a003_tag::ui::list::TagList;
use crate::domain::a004_vendor::ui::list::VendorList;
use crate::domain::a005_flash_sale::ui::list::FlashSaleList;
use crate::domain::a006_return_request::ui::list::ReturnList;
use crate::domain::a007_spec_table::ui::list::SpecTableList;
use crate::domain::a008_page::ui::list::PageList;
use crate::layout::global_context::use_global_context;
use crate::layout::Shell;
use crate::pages::not_found::NotFoundPage;
use crate::pages::search::SearchPage;
use contracts::shared::query_state::SEARCH_PATH;
use leptos::prelude::*;

/// Страницы приложения. Маршрутизация — простое сопоставление пути,
/// состояние фильтров живёт в query string и разбирается самими страницами.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Search,
    Products,
    Reviews,
    Tags,
    Vendors,
    FlashSales,
    Returns,
    SpecTables,
    Pages,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path.is_empty() || path == SEARCH_PATH || path.starts_with("/search/") {
            return Route::Search;
        }
        match path {
            "/admin" | "/admin/products" => Route::Products,
            "/admin/reviews" => Route::Reviews,
            "/admin/tags" => Route::Tags,
            "/admin/vendors" => Route::Vendors,
            "/admin/flash-sales" => Route::FlashSales,
            "/admin/returns" => Route::Returns,
            "/admin/spec-tables" => Route::SpecTables,
            "/admin/pages" => Route::Pages,
            _ => Route::NotFound,
        }
    }

    fn render(self) -> AnyView {
        match self {
            Route::Search => view! { <SearchPage /> }.into_any(),
            Route::Products => view! { <ProductList /> }.into_any(),
            Route::Reviews => view! { <ReviewList /> }.into_any(),
            Route::Tags => view! { <TagList /> }.into_any(),
            Route::Vendors => view! { <VendorList /> }.into_any(),
            Route::FlashSales => view! { <FlashSaleList /> }.into_any(),
            Route::Returns => view! { <ReturnList /> }.into_any(),
            Route::SpecTables => view! { <SpecTableList /> }.into_any(),
            Route::Pages => view! { <PageList /> }.into_any(),
            Route::NotFound => view! { <NotFoundPage /> }.into_any(),
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    // Memo: смена только query string (фильтры) не пересоздаёт страницу
    let route = Memo::new(move |_| Route::from_path(&ctx.path()));

    view! {
        <Shell>
            {move || {
                let route = route.get();
                log::debug!("route: {:?}", route);
                route.render()
            }}
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Search);
        assert_eq!(Route::from_path("/search"), Route::Search);
        assert_eq!(Route::from_path("/search/fashion/men/shoes"), Route::Search);
        assert_eq!(Route::from_path("/admin/reviews/"), Route::Reviews);
        assert_eq!(Route::from_path("/admin/flash-sales"), Route::FlashSales);
        assert_eq!(Route::from_path("/searching"), Route::NotFound);
        assert_eq!(Route::from_path("/admin/unknown"), Route::NotFound);
    }
}
