use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::main_lib::AppState;

/// GeoJSON country boundaries for the map.
///
/// The document is serialized once at startup; this hands out the cached
/// bytes.
async fn get_countries(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.countries.clone(),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/countries", get(get_countries))
}
