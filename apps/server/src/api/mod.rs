//! HTTP surface of the dashboard backend.
//!
//! Every endpoint answers 200 with a JSON body; failures ride inside the
//! payload (an `error` field or an empty list) so the map frontend never
//! has to branch on status codes.

mod countries;
mod country;
mod markets;
mod news;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

/// Builds the full application router.
pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(countries::router())
        .merge(country::router())
        .merge(markets::router())
        .merge(news::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
