use crate::layout::global_context::use_global_context;
use contracts::shared::i18n::{has_message, t, Locale};
use leptos::prelude::*;

/// Доступ к переводам текущей локали; чтение локали реактивное.
#[derive(Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
}

impl I18n {
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn t(&self, id: &str) -> String {
        t(self.locale.get(), id).to_string()
    }

    /// Заголовки колонок и подписи действий: id из каталога или готовый текст.
    pub fn label(&self, text: &str) -> String {
        if has_message(text) {
            self.t(text)
        } else {
            text.to_string()
        }
    }
}

pub fn use_i18n() -> I18n {
    I18n {
        locale: use_global_context().locale,
    }
}
