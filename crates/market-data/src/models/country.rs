use serde::{Deserialize, Serialize};

use super::ticker::TickerRecord;

/// Aggregate market snapshot for one country.
///
/// Missing categories are holes, not failures: an index that could not be
/// fetched is simply absent from `indices`, a failed bond lookup leaves
/// `bonds` null. The dashboard renders whatever is present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryMarketRecord {
    /// Equity indices in configured order
    pub indices: Vec<TickerRecord>,

    /// Currency pair against the dashboard base
    pub currency: Option<TickerRecord>,

    /// Benchmark government bond yield
    pub bonds: Option<TickerRecord>,

    /// Anything else configured for the country (volatility gauges)
    pub other: Vec<TickerRecord>,
}

/// What `/api/country/{code}` carries in its `market_data` field: either an
/// aggregate record or an error payload for unconfigured countries.
///
/// Untagged on purpose. The record shape and the `{"error": ...}` shape are
/// distinguishable because a record always has its `indices` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountryMarketData {
    Markets(CountryMarketRecord),
    Error { error: String },
}

impl CountryMarketData {
    pub fn error(message: String) -> Self {
        Self::Error { error: message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_as_bare_error_object() {
        let data = CountryMarketData::error("No market data configured for zz".to_string());
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"error":"No market data configured for zz"}"#);
    }

    #[test]
    fn test_record_serializes_missing_categories_as_null() {
        let data = CountryMarketData::Markets(CountryMarketRecord::default());
        let json = serde_json::to_value(&data).unwrap();
        assert!(json["indices"].as_array().unwrap().is_empty());
        assert!(json["currency"].is_null());
        assert!(json["bonds"].is_null());
    }

    #[test]
    fn test_untagged_roundtrip_picks_correct_variant() {
        let error: CountryMarketData =
            serde_json::from_str(r#"{"error":"No market data configured for zz"}"#).unwrap();
        assert!(matches!(error, CountryMarketData::Error { .. }));

        let markets: CountryMarketData = serde_json::from_str(
            r#"{"indices":[],"currency":null,"bonds":null,"other":[]}"#,
        )
        .unwrap();
        assert!(matches!(markets, CountryMarketData::Markets(_)));
    }
}
