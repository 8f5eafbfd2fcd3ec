//! Keyword classification of headlines.
//!
//! Plain lower-cased substring matching against fixed keyword tables. The
//! first matching group wins, so table order doubles as the tie-break.

use crate::model::AssetClass;

/// Asset-class keyword groups, in tie-break order.
pub const ASSET_CLASS_KEYWORDS: &[(AssetClass, &[&str])] = &[
    (
        AssetClass::Stocks,
        &["stock", "share", "equity", "nasdaq", "dow", "s&p"],
    ),
    (AssetClass::Bonds, &["bond", "treasury", "yield", "debt"]),
    (
        AssetClass::Currencies,
        &["currency", "forex", "dollar", "euro", "yen", "pound"],
    ),
    (
        AssetClass::Commodities,
        &["gold", "oil", "commodity", "crude", "natural gas"],
    ),
    (AssetClass::Crypto, &["bitcoin", "crypto", "ethereum", "token"]),
];

/// Country keyword groups, in detection order.
pub const COUNTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "us",
        &[
            "us",
            "united states",
            "america",
            "washington",
            "new york",
            "fed",
            "nasdaq",
            "dow",
        ],
    ),
    ("uk", &["uk", "britain", "england", "london", "british"]),
    ("jp", &["japan", "japanese", "tokyo", "yen", "nikkei"]),
    ("cn", &["china", "chinese", "beijing", "shanghai"]),
    ("eu", &["europe", "european", "euro", "ecb", "brussels"]),
    ("de", &["germany", "german", "berlin", "frankfurt"]),
    ("fr", &["france", "french", "paris"]),
    ("in", &["india", "indian", "mumbai", "delhi"]),
];

/// Classify a headline into an asset class.
///
/// The first group containing a matching keyword wins; a headline matching
/// nothing is [`AssetClass::General`].
pub fn classify_asset(text: &str) -> AssetClass {
    let text = text.to_lowercase();
    for (class, keywords) in ASSET_CLASS_KEYWORDS {
        if keywords.iter().any(|&keyword| text.contains(keyword)) {
            return *class;
        }
    }
    AssetClass::General
}

/// Guess which country a headline is about.
///
/// Returns the first country whose keyword group matches, or `None` when the
/// headline names no recognizable region.
pub fn detect_country(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    for (country, keywords) in COUNTRY_KEYWORDS {
        if keywords.iter().any(|&keyword| text.contains(keyword)) {
            return Some(country);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_asset_matches_keyword_group() {
        assert_eq!(
            classify_asset("Fed raises rates, bond yields jump"),
            AssetClass::Bonds
        );
        assert_eq!(classify_asset("Gold hits record high"), AssetClass::Commodities);
        assert_eq!(classify_asset("Bitcoin token sale frenzy"), AssetClass::Crypto);
    }

    #[test]
    fn test_classify_asset_is_case_insensitive() {
        assert_eq!(classify_asset("NASDAQ FUTURES CLIMB"), AssetClass::Stocks);
    }

    #[test]
    fn test_classify_asset_first_group_wins() {
        // Matches both the stocks and bonds groups; stocks comes first.
        assert_eq!(
            classify_asset("Stocks rally as bond yields fall"),
            AssetClass::Stocks
        );
    }

    #[test]
    fn test_classify_asset_defaults_to_general() {
        assert_eq!(classify_asset("Quiet week ahead"), AssetClass::General);
    }

    #[test]
    fn test_detect_country_matches_keywords() {
        assert_eq!(
            detect_country("Tokyo markets rally as Nikkei hits record"),
            Some("jp")
        );
        assert_eq!(detect_country("Fed signals rate cut"), Some("us"));
        assert_eq!(detect_country("Euro rallies after ECB meeting"), Some("eu"));
    }

    #[test]
    fn test_detect_country_none_without_keywords() {
        assert_eq!(detect_country("Local bakery wins award"), None);
    }

    #[test]
    fn test_detect_country_first_group_wins() {
        // "dow" puts it in the us group before jp's "yen" is reached.
        assert_eq!(detect_country("Dow slides as yen strengthens"), Some("us"));
    }
}
