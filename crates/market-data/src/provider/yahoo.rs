//! Yahoo Finance market data provider.
//!
//! Daily history comes from the chart API, display names from the search
//! API. Symbols are Yahoo notation throughout: indices with a caret prefix
//! ("^GSPC"), FX pairs with an "=X" suffix ("GBPUSD=X").

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use time::OffsetDateTime;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::provider::{DailyClose, InstrumentInfo, QuoteProvider};

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    /// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
    fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(dt.timestamp())
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Look up a display name through the search API.
    async fn search_display_name(
        &self,
        symbol: &str,
    ) -> Result<Option<String>, MarketDataError> {
        let encoded_symbol = encode(symbol);
        let result = self
            .connector
            .search_ticker(&encoded_symbol)
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        Ok(result
            .quotes
            .iter()
            .find(|q| q.symbol == symbol)
            .map(|item| pick_name(&item.short_name, &item.long_name))
            .filter(|name| !name.is_empty()))
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn daily_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyClose>, MarketDataError> {
        debug!(
            "Fetching Yahoo history for '{}' between {} and {}",
            symbol,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );

        let start_time = Self::chrono_to_offset_datetime(start);
        let end_time = Self::chrono_to_offset_datetime(end);

        let response = self
            .connector
            .get_quote_history(symbol, start_time, end_time)
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let closes: Vec<DailyClose> = yahoo_quotes
                    .into_iter()
                    .filter_map(|q| match Utc.timestamp_opt(q.timestamp as i64, 0).single() {
                        Some(timestamp) => Some(DailyClose::new(timestamp, q.close)),
                        None => {
                            warn!("Skipping quote with invalid timestamp: {}", q.timestamp);
                            None
                        }
                    })
                    .collect();

                Ok(closes)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!(
                    "No historical quotes returned for '{}' between {} and {}",
                    symbol,
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                );
                Ok(Vec::new())
            }
            Err(e) => Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }),
        }
    }

    async fn instrument_info(&self, symbol: &str) -> Result<InstrumentInfo, MarketDataError> {
        // The quote currency of an FX pair is spelled out in the symbol
        // itself; nothing else on this path exposes one.
        let currency = fx_quote_currency(symbol).map(|c| c.to_string());

        let name = match self.search_display_name(symbol).await {
            Ok(name) => name,
            Err(e) => {
                debug!("Name lookup failed for '{}': {}", symbol, e);
                None
            }
        };

        Ok(InstrumentInfo { name, currency })
    }
}

/// Pick a display name: the short name when present, the long name
/// otherwise, with HTML entities cleaned up ("S&amp;P 500").
fn pick_name(short_name: &str, long_name: &str) -> String {
    let name = if short_name.is_empty() {
        long_name
    } else {
        short_name
    };
    name.replace("&amp;", "&")
}

/// Quote currency baked into a Yahoo FX symbol ("GBPUSD=X" quotes USD).
fn fx_quote_currency(symbol: &str) -> Option<&str> {
    let pair = symbol.strip_suffix("=X")?;
    if pair.len() == 6 && pair.chars().all(|c| c.is_ascii_uppercase()) {
        Some(&pair[3..6])
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_name() {
        // Prefers the short name
        assert_eq!(pick_name("S&P 500", "S&P 500 Index"), "S&P 500");

        // Falls back to the long name
        assert_eq!(pick_name("", "FTSE 100 Index"), "FTSE 100 Index");

        // HTML entity cleanup
        assert_eq!(pick_name("S&amp;P 500", ""), "S&P 500");

        // Both empty stays empty; callers treat that as no name
        assert_eq!(pick_name("", ""), "");
    }

    #[test]
    fn test_fx_quote_currency() {
        assert_eq!(fx_quote_currency("GBPUSD=X"), Some("USD"));
        assert_eq!(fx_quote_currency("USDEUR=X"), Some("EUR"));
        assert_eq!(fx_quote_currency("JPYUSD=X"), Some("USD"));

        // Not FX symbols
        assert_eq!(fx_quote_currency("^GSPC"), None);
        assert_eq!(fx_quote_currency("000300.SS"), None);
        assert_eq!(fx_quote_currency("EUR=X"), None);
        assert_eq!(fx_quote_currency("eurusd=x"), None);
    }

    #[test]
    fn test_chrono_to_offset_datetime_preserves_epoch() {
        let now = Utc::now();
        let converted = YahooProvider::chrono_to_offset_datetime(now);
        assert_eq!(converted.unix_timestamp(), now.timestamp());
    }
}
