//! Моковый API: данные из `contracts` с искусственной задержкой вместо HTTP.
//!
//! Ответ проходит через JSON, как настоящий: типы должны сериализоваться
//! без потерь, иначе загрузка падает с ошибкой в консоли.

use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_product::{mock_products, Product};
use contracts::domain::a002_review::{mock_reviews, Review};
use contracts::domain::a003_tag::{mock_tags, Tag};
use contracts::domain::a004_vendor::{mock_vendors, Vendor};
use contracts::domain::a005_flash_sale::{mock_flash_sales, FlashSale};
use contracts::domain::a006_return_request::{mock_returns, ReturnRequest};
use contracts::domain::a007_spec_table::{mock_spec_tables, SpecTable};
use contracts::domain::a008_page::{mock_pages, Page};
use anyhow::Context;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn simulated<T>(resource: &str, load: fn() -> Vec<T>, latency_ms: u32) -> anyhow::Result<Vec<T>>
where
    T: Serialize + DeserializeOwned,
{
    if latency_ms > 0 {
        TimeoutFuture::new(latency_ms).await;
    }
    let body = serde_json::to_string(&load()).with_context(|| format!("encode {}", resource))?;
    let items: Vec<T> = serde_json::from_str(&body).with_context(|| format!("decode {}", resource))?;
    log::info!("mock api: {} -> {} items ({} bytes)", resource, items.len(), body.len());
    Ok(items)
}

pub async fn fetch_products(latency_ms: u32) -> anyhow::Result<Vec<Product>> {
    simulated("products", mock_products, latency_ms).await
}

pub async fn fetch_reviews(latency_ms: u32) -> anyhow::Result<Vec<Review>> {
    simulated("reviews", mock_reviews, latency_ms).await
}

pub async fn fetch_tags(latency_ms: u32) -> anyhow::Result<Vec<Tag>> {
    simulated("tags", mock_tags, latency_ms).await
}

pub async fn fetch_vendors(latency_ms: u32) -> anyhow::Result<Vec<Vendor>> {
    simulated("vendors", mock_vendors, latency_ms).await
}

pub async fn fetch_flash_sales(latency_ms: u32) -> anyhow::Result<Vec<FlashSale>> {
    simulated("flash_sales", mock_flash_sales, latency_ms).await
}

pub async fn fetch_returns(latency_ms: u32) -> anyhow::Result<Vec<ReturnRequest>> {
    simulated("returns", mock_returns, latency_ms).await
}

pub async fn fetch_spec_tables(latency_ms: u32) -> anyhow::Result<Vec<SpecTable>> {
    simulated("spec_tables", mock_spec_tables, latency_ms).await
}

pub async fn fetch_pages(latency_ms: u32) -> anyhow::Result<Vec<Page>> {
    simulated("pages", mock_pages, latency_ms).await
}

/// Загружает список в сигнал, выставляя флаг загрузки. При ошибке прежние строки остаются.
pub fn load_into<T, F>(rows: RwSignal<Vec<T>>, loading: RwSignal<bool>, fetch: fn(u32) -> F)
where
    T: Send + Sync + 'static,
    F: std::future::Future<Output = anyhow::Result<Vec<T>>> + 'static,
{
    let latency_ms = use_context::<AppGlobalContext>()
        .map(|ctx| ctx.config.with_value(|c| c.mock_api.latency_ms))
        .unwrap_or(0);
    loading.set(true);
    spawn_local(async move {
        match fetch(latency_ms).await {
            Ok(items) => rows.set(items),
            Err(e) => log::error!("mock api error: {:#}", e),
        }
        loading.set(false);
    });
}
