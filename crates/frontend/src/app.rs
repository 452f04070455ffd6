use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::load_config;
use leptos::prelude::*;

/// Inline `<script type="application/toml" id="storefront-config">` overrides the embedded config.
fn config_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("storefront-config"))
        .and_then(|el| el.text_content())
}

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config(config_override().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid storefront config, using defaults: {}", e);
            Default::default()
        }
    };

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <AppRoutes />
    }
}
