//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Application title (link to the storefront)
//! - Language switch (EN ⇄ AR, sets `lang`/`dir` on `<html>`)

use crate::layout::global_context::use_global_context;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let i18n = use_i18n();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let toggle_locale = move |_| {
        ctx.toggle_locale();
        log::info!("locale switched to {}", ctx.locale.get_untracked());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" on:click=toggle_sidebar>
                    {icon("menu")}
                </button>
                <a
                    href="/search"
                    class="top-header__title"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate("/search");
                    }
                >
                    {move || i18n.t("app.title")}
                </a>
            </div>

            <div class="top-header__actions">
                // подпись — название другого языка
                <button class="top-header__icon-btn top-header__locale" on:click=toggle_locale>
                    {icon("globe")}
                    <span>{move || i18n.t("common.language")}</span>
                </button>
            </div>
        </header>
    }
}
