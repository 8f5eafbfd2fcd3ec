//! Provider trait for market data operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;

/// One daily bar, reduced to what the snapshot math needs.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyClose {
    /// Session timestamp as reported by the provider
    pub timestamp: DateTime<Utc>,
    /// Closing price
    pub close: f64,
}

impl DailyClose {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Descriptive instrument data. Everything is optional; the ticker service
/// fills in its defaults (symbol as name, USD as currency).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstrumentInfo {
    pub name: Option<String>,
    pub currency: Option<String>,
}

/// Trait for market data providers.
///
/// Implementations must be `Send + Sync` to work with async executors.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Stable identifier for logs (e.g. "YAHOO").
    fn id(&self) -> &'static str;

    /// Daily close history for `symbol` over `[start, end]`, oldest first.
    ///
    /// An empty vec means the symbol resolved but has no bars in the range;
    /// callers decide what that means for them.
    async fn daily_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyClose>, MarketDataError>;

    /// Descriptive info for `symbol`, best effort.
    async fn instrument_info(&self, symbol: &str) -> Result<InstrumentInfo, MarketDataError>;
}
