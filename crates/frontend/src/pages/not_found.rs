use crate::layout::global_context::use_global_context;
use crate::shared::i18n::use_i18n;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_global_context();
    let i18n = use_i18n();
    log::warn!("no page for {}", ctx.location.get_untracked());

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">{move || i18n.t("common.not_found")}</h1>
            </div>
            <div class="page__content">
                <a
                    href="/search"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate("/search");
                    }
                >
                    {move || i18n.t("nav.search")}
                </a>
            </div>
        </PageFrame>
    }
}
