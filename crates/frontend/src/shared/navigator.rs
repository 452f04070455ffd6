//! Навигатор поверх `window.history`, который держит `AppGlobalContext::location` в синхроне.

use crate::layout::global_context::{push_history, replace_history};
use contracts::shared::query_state::{split_url, Navigator};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    location: RwSignal<String>,
}

impl BrowserNavigator {
    pub fn new(location: RwSignal<String>) -> Self {
        Self { location }
    }
}

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        self.location.with_untracked(|url| split_url(url).0.to_string())
    }

    fn current_query(&self) -> String {
        self.location.with_untracked(|url| split_url(url).1.to_string())
    }

    fn replace(&self, url: &str) {
        replace_history(url);
        self.location.set(url.to_string());
    }

    fn push(&self, url: &str) {
        push_history(url);
        self.location.set(url.to_string());
    }
}
