//! Country news feed assembly.
//!
//! Picks the right regional page for a country, turns its article fragments
//! into classified news items, and keeps the scraper polite with a short
//! randomized pause after every page.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::{debug, warn};

use crate::classifier::{classify_asset, detect_country};
use crate::model::NewsItem;
use crate::page::ArticleSource;

/// Politeness delay bounds between page fetches, in seconds.
const POLITENESS_DELAY_MIN_SECS: f64 = 1.0;
const POLITENESS_DELAY_MAX_SECS: f64 = 2.0;

/// Page used for countries without a regional edition.
pub const GLOBAL_NEWS_URL: &str = "https://finance.yahoo.com/news/";

/// Byline fallbacks when the page carries no usable byline.
const DEFAULT_SOURCE: &str = "Yahoo Finance";
const DEFAULT_TIME: &str = "Today";

/// Regional news page for a country code, if one exists.
pub fn country_page(code: &str) -> Option<&'static str> {
    match code {
        "us" => Some("https://finance.yahoo.com/news/"),
        "uk" => Some("https://uk.finance.yahoo.com/news/"),
        "ca" => Some("https://ca.finance.yahoo.com/news/"),
        "au" => Some("https://au.finance.yahoo.com/news/"),
        "in" => Some("https://in.finance.yahoo.com/news/"),
        "sg" => Some("https://sg.finance.yahoo.com/news/"),
        "hk" => Some("https://hk.finance.yahoo.com/news/"),
        "jp" => Some("https://finance.yahoo.co.jp/news/"),
        _ => None,
    }
}

/// Country news, classified and ready to serve.
#[async_trait]
pub trait NewsServiceTrait: Send + Sync {
    /// Latest articles for `country_code`, in page order.
    async fn get_country_news(&self, country_code: &str) -> Vec<NewsItem>;
}

/// Assembles news items from page fragments.
///
/// Failures never escape: a page that cannot be fetched or parsed yields an
/// empty list and a log line.
pub struct NewsService {
    source: Arc<dyn ArticleSource>,
    delay_min: Duration,
    delay_max: Duration,
}

impl NewsService {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self {
            source,
            delay_min: Duration::from_secs_f64(POLITENESS_DELAY_MIN_SECS),
            delay_max: Duration::from_secs_f64(POLITENESS_DELAY_MAX_SECS),
        }
    }

    /// Override the politeness delay bounds. Tests pass zero.
    pub fn with_politeness_delay(mut self, min: Duration, max: Duration) -> Self {
        self.delay_min = min;
        self.delay_max = max;
        self
    }

    /// Sleep for a uniformly random duration inside the politeness bounds.
    async fn politeness_pause(&self) {
        let delay = if self.delay_max > self.delay_min {
            let secs = rand::thread_rng()
                .gen_range(self.delay_min.as_secs_f64()..=self.delay_max.as_secs_f64());
            Duration::from_secs_f64(secs)
        } else {
            self.delay_min
        };

        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl NewsServiceTrait for NewsService {
    async fn get_country_news(&self, country_code: &str) -> Vec<NewsItem> {
        let (url, is_fallback) = match country_page(country_code) {
            Some(url) => (url, false),
            None => (GLOBAL_NEWS_URL, true),
        };

        let fragments = match self.source.fetch_articles(url).await {
            Ok(fragments) => fragments,
            Err(e) => {
                warn!("News fetch for '{}' failed ({}): {}", country_code, url, e);
                return Vec::new();
            }
        };

        let mut items = Vec::new();
        for fragment in fragments {
            let Some(headline) = fragment.headline else {
                continue;
            };

            // Fallback-page items get a relevance check; regional pages are
            // already scoped to their country.
            if is_fallback {
                if let Some(detected) = detect_country(&headline) {
                    if detected != country_code {
                        continue;
                    }
                }
            }

            let (source, time) = split_byline(&fragment.byline);

            items.push(NewsItem {
                asset_class: classify_asset(&headline),
                headline,
                link: fragment.link,
                source,
                time,
                country: country_code.to_string(),
            });
        }

        debug!("Collected {} news items for '{}'", items.len(), country_code);
        self.politeness_pause().await;
        items
    }
}

/// Split a raw byline into source and time, the first two middle-dot
/// segments. Anything after a second separator (read-time suffixes and the
/// like) is dropped. Bylines without a separator fall back to
/// "Yahoo Finance" / "Today".
fn split_byline(byline: &str) -> (String, String) {
    let mut parts = byline.split('\u{b7}');
    match (parts.next(), parts.next()) {
        (Some(source), Some(time)) => (source.trim().to_string(), time.trim().to_string()),
        _ => (DEFAULT_SOURCE.to_string(), DEFAULT_TIME.to_string()),
    }
}
