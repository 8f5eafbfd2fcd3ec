//! Cached per-symbol snapshots.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use crate::cache::{ticker_key, CachedMarket, TimedCache};
use crate::models::TickerRecord;
use crate::provider::{DailyClose, InstrumentInfo, QuoteProvider};

/// How far back to ask for history. Five calendar days cover the two most
/// recent sessions across a weekend plus a holiday.
const HISTORY_WINDOW_DAYS: i64 = 5;

/// Currency reported when the provider does not specify one.
const DEFAULT_CURRENCY: &str = "USD";

/// Cached snapshot fetcher for single symbols.
///
/// Every failure mode collapses to `None`: an unknown symbol, a provider
/// outage and a symbol with no recent trading all look the same to callers.
/// The logs keep the distinction.
pub struct TickerService {
    provider: Arc<dyn QuoteProvider>,
    cache: Arc<TimedCache<CachedMarket>>,
    ttl: Duration,
}

impl TickerService {
    pub fn new(
        provider: Arc<dyn QuoteProvider>,
        cache: Arc<TimedCache<CachedMarket>>,
        ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            ttl,
        }
    }

    /// Snapshot for `symbol`, served from cache when fresh.
    ///
    /// Absent results are cached too, so a dead symbol is retried at most
    /// once per TTL window.
    pub async fn fetch(&self, symbol: &str) -> Option<TickerRecord> {
        let key = ticker_key(symbol);
        let cached = self
            .cache
            .get_or_compute(&key, self.ttl, || async {
                CachedMarket::Ticker(self.fetch_uncached(symbol).await)
            })
            .await;

        match cached {
            CachedMarket::Ticker(record) => record,
            // ticker_ keys only ever hold Ticker values
            CachedMarket::Country(_) => None,
        }
    }

    /// Fetch a fresh snapshot, bypassing the cache.
    async fn fetch_uncached(&self, symbol: &str) -> Option<TickerRecord> {
        let end = Utc::now();
        let start = end - chrono::Duration::days(HISTORY_WINDOW_DAYS);

        let closes = match self.provider.daily_history(symbol, start, end).await {
            Ok(closes) => closes,
            Err(e) => {
                warn!(
                    "History fetch from {} failed for '{}': {}",
                    self.provider.id(),
                    symbol,
                    e
                );
                return None;
            }
        };

        if closes.is_empty() {
            debug!("No recent history for '{}'", symbol);
            return None;
        }

        let info = match self.provider.instrument_info(symbol).await {
            Ok(info) => info,
            Err(e) => {
                debug!("Info lookup failed for '{}', using defaults: {}", symbol, e);
                InstrumentInfo::default()
            }
        };

        Some(TickerRecord {
            ticker: symbol.to_string(),
            name: info.name.unwrap_or_else(|| symbol.to_string()),
            price: closes[closes.len() - 1].close,
            change_percent: change_percent(&closes),
            currency: info
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }
}

/// Percent change between the two most recent closes; zero when there are
/// fewer than two sessions to compare.
fn change_percent(closes: &[DailyClose]) -> f64 {
    if closes.len() < 2 {
        return 0.0;
    }
    let latest = closes[closes.len() - 1].close;
    let previous = closes[closes.len() - 2].close;
    (latest - previous) / previous * 100.0
}
