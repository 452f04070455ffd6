use contracts::shared::config::StorefrontConfig;
use contracts::shared::i18n::Locale;
use contracts::shared::query_state::split_url;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub locale: RwSignal<Locale>,
    /// Последний зафиксированный URL (путь + query).
    pub location: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    pub config: StoredValue<StorefrontConfig>,
}

impl AppGlobalContext {
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            locale: RwSignal::new(config.locale.default),
            location: RwSignal::new(current_browser_url()),
            left_open: RwSignal::new(true),
            config: StoredValue::new(config),
        }
    }

    /// Reactive path of the current location.
    pub fn path(&self) -> String {
        self.location.with(|url| split_url(url).0.to_string())
    }

    pub fn init_router_integration(&self) {
        let location = self.location;
        // back/forward: history уже изменилась, перечитываем location
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            let url = current_browser_url();
            log::debug!("popstate -> {}", url);
            location.set(url);
        });
        on_cleanup(move || handle.remove());

        let locale = self.locale;
        Effect::new(move |_| {
            let locale = locale.get();
            if let Some(root) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute("lang", locale.code());
                let _ = root.set_attribute("dir", locale.dir());
            }
        });
    }

    /// Переход внутри приложения без перезагрузки страницы.
    pub fn navigate(&self, url: &str) {
        if self.location.with_untracked(|current| current == url) {
            return;
        }
        push_history(url);
        self.location.set(url.to_string());
    }

    pub fn toggle_locale(&self) {
        self.locale.update(|l| *l = l.toggled());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

pub fn current_browser_url() -> String {
    window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{}{}", path, search)
        })
        .unwrap_or_else(|| "/".to_string())
}

pub fn push_history(url: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)) {
            log::warn!("pushState failed: {:?}", e);
        }
    }
}

pub fn replace_history(url: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)) {
            log::warn!("replaceState failed: {:?}", e);
        }
    }
}
