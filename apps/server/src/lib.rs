//! Dashboard backend: market data and news over a small JSON API.

pub mod api;
pub mod config;
pub mod geojson;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
