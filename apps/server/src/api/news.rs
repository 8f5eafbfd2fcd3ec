use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use macromap_news::NewsItem;
use serde::Deserialize;

use crate::main_lib::AppState;

fn default_country() -> String {
    "us".to_string()
}

fn default_asset() -> String {
    "all".to_string()
}

#[derive(Deserialize)]
struct NewsQuery {
    #[serde(default = "default_country")]
    country: String,
    #[serde(default = "default_asset")]
    asset: String,
}

/// Headlines for a country, optionally narrowed to one asset class.
async fn get_news(
    Query(query): Query<NewsQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<NewsItem>> {
    let mut items = state.news_service.get_country_news(&query.country).await;

    if query.asset != "all" {
        items.retain(|item| item.asset_class.as_str() == query.asset);
    }

    Json(items)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/news", get(get_news))
}
