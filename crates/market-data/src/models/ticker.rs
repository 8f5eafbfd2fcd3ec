use serde::{Deserialize, Serialize};

/// Snapshot for a single symbol.
///
/// `price` is the latest daily close; `change_percent` compares the two most
/// recent closes and is `0.0` when fewer than two sessions are available.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickerRecord {
    /// Provider symbol (e.g. "^GSPC", "EURUSD=X")
    pub ticker: String,

    /// Display name; falls back to the symbol when the provider has none
    pub name: String,

    /// Latest daily close
    pub price: f64,

    /// Day-over-day change in percent
    pub change_percent: f64,

    /// Quote currency; "USD" when the provider reports none
    pub currency: String,
}

impl TickerRecord {
    pub fn new(
        ticker: String,
        name: String,
        price: f64,
        change_percent: f64,
        currency: String,
    ) -> Self {
        Self {
            ticker,
            name,
            price,
            change_percent,
            currency,
        }
    }
}
