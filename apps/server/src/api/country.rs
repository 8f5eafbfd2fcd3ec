use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use macromap_market_data::CountryMarketData;
use macromap_news::NewsItem;
use serde::Serialize;

use crate::main_lib::AppState;

/// Combined payload for one country on the map.
#[derive(Serialize)]
struct CountryOverview {
    country_code: String,
    market_data: CountryMarketData,
    news: Vec<NewsItem>,
}

/// Market snapshot and headlines for a single country.
async fn get_country(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<CountryOverview> {
    let market_data = state.market_service.get_country_market(&code).await;
    let news = state.news_service.get_country_news(&code).await;

    Json(CountryOverview {
        country_code: code,
        market_data,
        news,
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/country/{code}", get(get_country))
}
