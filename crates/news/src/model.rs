use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse asset classification for headlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stocks,
    Bonds,
    Currencies,
    Commodities,
    Crypto,
    #[default]
    General,
}

impl AssetClass {
    /// Returns the wire identifier for this asset class.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Stocks => "stocks",
            AssetClass::Bonds => "bonds",
            AssetClass::Currencies => "currencies",
            AssetClass::Commodities => "commodities",
            AssetClass::Crypto => "crypto",
            AssetClass::General => "general",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One article as the dashboard renders it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Article headline, as extracted
    pub headline: String,
    /// Absolute link to the article; empty when none was found
    pub link: String,
    /// Publisher; "Yahoo Finance" when the byline names none
    pub source: String,
    /// Free-text publication time ("2 hours ago"); never parsed
    pub time: String,
    /// The requested country code, not the detected one
    pub country: String,
    /// Keyword classification of the headline
    pub asset_class: AssetClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_class_serializes_lowercase() {
        let json = serde_json::to_string(&AssetClass::Stocks).unwrap();
        assert_eq!(json, r#""stocks""#);

        let parsed: AssetClass = serde_json::from_str(r#""commodities""#).unwrap();
        assert_eq!(parsed, AssetClass::Commodities);
    }

    #[test]
    fn test_asset_class_display_matches_wire_form() {
        assert_eq!(AssetClass::General.to_string(), "general");
        assert_eq!(AssetClass::Crypto.as_str(), "crypto");
    }

    #[test]
    fn test_news_item_uses_snake_case_keys() {
        let item = NewsItem {
            headline: "Stocks rally".to_string(),
            link: "https://finance.yahoo.com/news/x.html".to_string(),
            source: "Reuters".to_string(),
            time: "2 hours ago".to_string(),
            country: "us".to_string(),
            asset_class: AssetClass::Stocks,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["asset_class"], "stocks");
        assert_eq!(json["headline"], "Stocks rally");
        assert_eq!(json["country"], "us");
    }
}
