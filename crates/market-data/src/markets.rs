//! Per-country market aggregates.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::cache::{market_key, CachedMarket, TimedCache};
use crate::config::{country_assets, CountryAssets, MAJOR_MARKETS};
use crate::models::{CountryMarketData, CountryMarketRecord};
use crate::tickers::TickerService;

/// Aggregated market data, one country at a time.
#[async_trait]
pub trait MarketServiceTrait: Send + Sync {
    /// Market snapshot for one country, or an error payload when the
    /// country has no asset configuration.
    async fn get_country_market(&self, country_code: &str) -> CountryMarketData;

    /// Snapshots for the fixed overview set, keyed by country code.
    async fn get_major_markets(&self) -> BTreeMap<String, CountryMarketData>;
}

/// Aggregates per-ticker snapshots into per-country records.
pub struct MarketService {
    tickers: TickerService,
    cache: Arc<TimedCache<CachedMarket>>,
    ttl: Duration,
}

impl MarketService {
    pub fn new(
        tickers: TickerService,
        cache: Arc<TimedCache<CachedMarket>>,
        ttl: Duration,
    ) -> Self {
        Self {
            tickers,
            cache,
            ttl,
        }
    }

    /// Assemble a fresh aggregate for a configured country.
    ///
    /// Categories fail independently: a dead index symbol leaves a hole in
    /// `indices`, it does not block the currency or bond lookups.
    async fn fetch_country(&self, assets: CountryAssets) -> CountryMarketRecord {
        let mut record = CountryMarketRecord::default();

        for &symbol in assets.indices {
            if let Some(data) = self.tickers.fetch(symbol).await {
                record.indices.push(data);
            }
        }

        if let Some(symbol) = assets.currency {
            record.currency = self.tickers.fetch(symbol).await;
        }

        if let Some(symbol) = assets.bonds {
            record.bonds = self.tickers.fetch(symbol).await;
        }

        if let Some(symbol) = assets.vix {
            if let Some(data) = self.tickers.fetch(symbol).await {
                record.other.push(data);
            }
        }

        record
    }
}

#[async_trait]
impl MarketServiceTrait for MarketService {
    async fn get_country_market(&self, country_code: &str) -> CountryMarketData {
        let Some(assets) = country_assets(country_code) else {
            debug!("No asset configuration for '{}'", country_code);
            return CountryMarketData::error(format!(
                "No market data configured for {}",
                country_code
            ));
        };

        let key = market_key(country_code);
        let cached = self
            .cache
            .get_or_compute(&key, self.ttl, || async {
                CachedMarket::Country(self.fetch_country(assets).await)
            })
            .await;

        match cached {
            CachedMarket::Country(record) => CountryMarketData::Markets(record),
            // market_ keys only ever hold Country values
            CachedMarket::Ticker(_) => {
                CountryMarketData::Markets(CountryMarketRecord::default())
            }
        }
    }

    async fn get_major_markets(&self) -> BTreeMap<String, CountryMarketData> {
        let mut markets = BTreeMap::new();
        for &code in MAJOR_MARKETS {
            let data = self.get_country_market(code).await;
            markets.insert(code.to_string(), data);
        }
        markets
    }
}
