use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use macromap_market_data::{
    MarketService, MarketServiceTrait, TickerService, TimedCache, YahooProvider,
};
use macromap_news::{NewsService, NewsServiceTrait, YahooNewsPage};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::geojson;

pub struct AppState {
    pub market_service: Arc<dyn MarketServiceTrait + Send + Sync>,
    pub news_service: Arc<dyn NewsServiceTrait + Send + Sync>,
    /// Country boundaries served to the map layer, serialized once at
    /// startup. The document runs to tens of megabytes, so per-request
    /// encoding is off the table.
    pub countries: Bytes,
}

pub fn init_tracing() {
    let log_format = std::env::var("MM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // One shared store so ticker and country entries age out together.
    let cache = Arc::new(TimedCache::default());
    let ttl = Duration::from_secs(config.cache_ttl_secs);

    let provider = Arc::new(YahooProvider::new()?);
    let ticker_service = TickerService::new(provider, cache.clone(), ttl);
    let market_service: Arc<dyn MarketServiceTrait + Send + Sync> =
        Arc::new(MarketService::new(ticker_service, cache, ttl));

    let page = Arc::new(YahooNewsPage::new()?);
    let news_service: Arc<dyn NewsServiceTrait + Send + Sync> = Arc::new(NewsService::new(page));

    // A missing boundaries file degrades to an empty layer; the map loses
    // its shapes but the API stays up.
    let countries = match geojson::load_countries(&config.static_dir).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Countries file unavailable ({}); serving an empty layer", e);
            serde_json::json!({ "type": "FeatureCollection", "features": [] })
        }
    };
    let countries = Bytes::from(serde_json::to_vec(&countries)?);

    Ok(Arc::new(AppState {
        market_service,
        news_service,
        countries,
    }))
}
