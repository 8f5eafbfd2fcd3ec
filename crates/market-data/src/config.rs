//! Static per-country asset configuration.
//!
//! Which tickers make up a country's market snapshot, in Yahoo Finance
//! notation. The table is fixed at compile time; a country without an entry
//! gets an error payload, never a guessed one.

/// Tickers that make up one country's market snapshot.
#[derive(Clone, Copy, Debug)]
pub struct CountryAssets {
    /// Equity indices, in display order
    pub indices: &'static [&'static str],
    /// Currency pair against the dashboard base
    pub currency: Option<&'static str>,
    /// Benchmark government bond yield
    pub bonds: Option<&'static str>,
    /// Volatility gauge; lands in the aggregate's `other` bucket
    pub vix: Option<&'static str>,
}

/// Countries served by the markets overview endpoint.
pub const MAJOR_MARKETS: &[&str] = &["us", "uk", "jp", "cn", "de"];

/// Look up the asset configuration for a two-letter country code.
pub fn country_assets(code: &str) -> Option<CountryAssets> {
    match code {
        // S&P 500, Dow Jones, NASDAQ / USD-EUR / 10-year Treasury yield
        "us" => Some(CountryAssets {
            indices: &["^GSPC", "^DJI", "^IXIC"],
            currency: Some("USDEUR=X"),
            bonds: Some("^TNX"),
            vix: Some("^VIX"),
        }),
        // FTSE 100 / GBP-USD / 10-year Gilt
        "uk" => Some(CountryAssets {
            indices: &["^FTSE"],
            currency: Some("GBPUSD=X"),
            bonds: Some("^TMBMKGB-10Y"),
            vix: None,
        }),
        // Nikkei 225 / JPY-USD / 10-year JGB
        "jp" => Some(CountryAssets {
            indices: &["^N225"],
            currency: Some("JPYUSD=X"),
            bonds: Some("^JGBS10Y"),
            vix: None,
        }),
        // Shanghai Composite, CSI 300 / CNY-USD
        "cn" => Some(CountryAssets {
            indices: &["^SSEC", "000300.SS"],
            currency: Some("CNYUSD=X"),
            bonds: None,
            vix: None,
        }),
        // DAX / EUR-USD / 10-year Bund
        "de" => Some(CountryAssets {
            indices: &["^GDAXI"],
            currency: Some("EURUSD=X"),
            bonds: Some("^TMBMKDE-10Y"),
            vix: None,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_major_market_is_configured() {
        for code in MAJOR_MARKETS {
            let assets = country_assets(code);
            assert!(assets.is_some(), "missing config for '{}'", code);
            assert!(!assets.unwrap().indices.is_empty());
        }
    }

    #[test]
    fn test_unknown_country_has_no_config() {
        assert!(country_assets("zz").is_none());
        assert!(country_assets("").is_none());
        // Codes are lowercase; an uppercase variant is a different string
        assert!(country_assets("US").is_none());
    }

    #[test]
    fn test_us_carries_the_volatility_gauge() {
        let us = country_assets("us").unwrap();
        assert_eq!(us.vix, Some("^VIX"));
        assert_eq!(us.indices, &["^GSPC", "^DJI", "^IXIC"]);
    }

    #[test]
    fn test_cn_has_no_bond_benchmark() {
        let cn = country_assets("cn").unwrap();
        assert_eq!(cn.bonds, None);
        assert_eq!(cn.indices.len(), 2);
    }
}
