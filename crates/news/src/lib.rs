//! # Macromap News Crate
//!
//! Scraped market headlines for the dashboard. The crate fetches a
//! country's Yahoo Finance news page, cuts it into article fragments,
//! classifies each headline by asset class, and filters global-page
//! results down to the requested country.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │     NewsService      │  page choice, filtering, classification
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │    ArticleSource     │  trait; YahooNewsPage is the live impl
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │   page scraping      │  reqwest + scraper, browser-like headers
//! └──────────────────────┘
//! ```
//!
//! Results are ephemeral: every call re-fetches its page, and a short
//! randomized pause after each fetch keeps the scraper polite.

pub mod classifier;
pub mod errors;
pub mod model;
pub mod page;
pub mod service;

pub use classifier::{classify_asset, detect_country, ASSET_CLASS_KEYWORDS, COUNTRY_KEYWORDS};
pub use errors::NewsError;
pub use model::{AssetClass, NewsItem};
pub use page::{ArticleFragment, ArticleSource, YahooNewsPage};
pub use service::{country_page, NewsService, NewsServiceTrait, GLOBAL_NEWS_URL};
