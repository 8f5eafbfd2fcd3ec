//! Macromap Market Data Crate
//!
//! Cached market snapshots for the map dashboard: per-ticker quotes and
//! per-country aggregates built from a pluggable quote provider.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Single-ticker snapshots (latest close plus day-over-day change)
//! - Per-country aggregates (indices, currency pair, bond yield, volatility)
//! - TTL caching with negative results cached like any other
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  MarketService   | --> |  CountryAssets   |  (static per-country config)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  TickerService   | --> |   TimedCache     |  (ticker_* / market_* keys)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |  QuoteProvider   |  (Yahoo)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`TickerRecord`] - Snapshot for one symbol (price, change percent)
//! - [`CountryMarketRecord`] - Aggregate for one country
//! - [`CountryMarketData`] - Aggregate-or-error union as it goes on the wire
//! - [`CountryAssets`] - Static ticker configuration for a country

pub mod cache;
pub mod config;
pub mod errors;
pub mod markets;
pub mod models;
pub mod provider;
pub mod tickers;

pub use models::{CountryMarketData, CountryMarketRecord, TickerRecord};

pub use cache::{CachedMarket, TimedCache, DEFAULT_CACHE_TTL};
pub use config::{country_assets, CountryAssets, MAJOR_MARKETS};
pub use errors::MarketDataError;
pub use markets::{MarketService, MarketServiceTrait};
pub use provider::yahoo::YahooProvider;
pub use provider::{DailyClose, InstrumentInfo, QuoteProvider};
pub use tickers::TickerService;
