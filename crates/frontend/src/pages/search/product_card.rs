use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// Карточка товара в сетке результатов; совпадение с `q` подсвечивается.
#[component]
pub fn ProductCard(product: Product, #[prop(into)] highlight: String) -> impl IntoView {
    let i18n = use_i18n();
    let price = format!("{:.2}", product.price);
    let rating = format!("{:.1}", product.rating);
    let in_stock = product.stock > 0;
    let brand = product.brand.clone();
    let color_label = format!("color.{}", product.color);
    let id = product.id.clone();

    view! {
        <article class="product-card" data-product-id=id>
            <div class="product-card__brand">{brand}</div>
            <h3 class="product-card__name">
                {move || highlight_matches(product.name(i18n.locale()), &highlight)}
            </h3>
            <div class="product-card__meta">
                <span>{move || i18n.t(&color_label)}</span>
                <span class="product-card__rating">{icon("star")}{rating}</span>
            </div>
            <div class="product-card__price">{price}</div>
            {(!in_stock).then(|| view! { <div class="product-card__stock product-card__stock--out">{move || i18n.t("search.out_of_stock")}</div> })}
        </article>
    }
}
