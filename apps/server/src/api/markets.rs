use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use macromap_market_data::CountryMarketData;

use crate::main_lib::AppState;

/// Overview snapshot for the major markets, keyed by country code.
async fn get_markets(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, CountryMarketData>> {
    Json(state.market_service.get_major_markets().await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/markets", get(get_markets))
}
