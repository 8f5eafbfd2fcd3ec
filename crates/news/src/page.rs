//! Yahoo Finance news page source.
//!
//! Fetches a regional news page and cuts its markup into article fragments.
//! The service layer turns fragments into news items; this layer only knows
//! about HTTP and markup.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use scraper::{Html, Selector};
use tracing::debug;

use crate::errors::NewsError;

// The news pages serve a stripped-down document to unknown agents, so the
// client identifies as a desktop browser.
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Origin used to absolutize site-relative article links.
const SITE_ORIGIN: &str = "https://finance.yahoo.com";

/// One article block as found in the page markup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArticleFragment {
    /// Headline text, if the block carries one
    pub headline: Option<String>,
    /// Absolute article link; empty when the block has none
    pub link: String,
    /// Raw byline text ("Reuters · 2 hours ago"); may be empty
    pub byline: String,
}

/// Source of article fragments for a news page URL.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_articles(&self, url: &str) -> Result<Vec<ArticleFragment>, NewsError>;
}

/// Live Yahoo Finance page source backed by an HTTP client.
pub struct YahooNewsPage {
    client: reqwest::Client,
}

impl YahooNewsPage {
    pub fn new() -> Result<Self, NewsError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ArticleSource for YahooNewsPage {
    async fn fetch_articles(&self, url: &str) -> Result<Vec<ArticleFragment>, NewsError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        parse_article_fragments(&body)
    }
}

/// Cut a news page into article fragments.
///
/// Yahoo wraps each article in a `div` whose class list contains `Ov(h)`;
/// the headline sits in an `h3`, the link in the first anchor, and the
/// byline in a muted `C(#959595)` div.
fn parse_article_fragments(html: &str) -> Result<Vec<ArticleFragment>, NewsError> {
    let article_selector = parse_selector(r#"div[class~="Ov(h)"]"#)?;
    let headline_selector = parse_selector("h3")?;
    let link_selector = parse_selector("a[href]")?;
    let byline_selector = parse_selector(r#"div[class~="C(#959595)"]"#)?;

    let document = Html::parse_document(html);
    let mut fragments = Vec::new();

    for article in document.select(&article_selector) {
        let headline = article
            .select(&headline_selector)
            .next()
            .map(|h| h.text().collect::<String>().trim().to_string())
            .filter(|h| !h.is_empty());

        let link = article
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(absolutize_link)
            .unwrap_or_default();

        let byline = article
            .select(&byline_selector)
            .next()
            .map(|d| d.text().collect::<String>())
            .unwrap_or_default();

        fragments.push(ArticleFragment {
            headline,
            link,
            byline,
        });
    }

    Ok(fragments)
}

fn parse_selector(css: &str) -> Result<Selector, NewsError> {
    Selector::parse(css).map_err(|e| NewsError::Selector(e.to_string()))
}

/// Prefix site-relative hrefs with the origin; leave absolute ones alone.
fn absolutize_link(href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", SITE_ORIGIN, href)
    } else {
        href.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"<html><body>
      <div class="js-stream-content Ov(h) Pend(44px)">
        <h3><a href="/news/stocks-rally-123.html">Stocks rally into the close</a></h3>
        <div class="Fz(11px) C(#959595)">Reuters <span>&#183;</span> 2 hours ago</div>
      </div>
      <div class="Ov(h)">
        <a href="/news/no-headline.html">thumbnail</a>
      </div>
      <div class="Ov(h)">
        <h3>Absolute link piece</h3>
        <a href="https://example.com/piece">read</a>
      </div>
      <div class="stream-sidebar">
        <h3>Not an article container</h3>
      </div>
    </body></html>"#;

    #[test]
    fn test_parses_article_blocks() {
        let fragments = parse_article_fragments(SAMPLE_PAGE).unwrap();
        assert_eq!(fragments.len(), 3);

        assert_eq!(
            fragments[0].headline.as_deref(),
            Some("Stocks rally into the close")
        );
        assert_eq!(
            fragments[0].link,
            "https://finance.yahoo.com/news/stocks-rally-123.html"
        );
        assert!(fragments[0].byline.contains("Reuters"));
        assert!(fragments[0].byline.contains('\u{b7}'));
    }

    #[test]
    fn test_block_without_headline_yields_none() {
        let fragments = parse_article_fragments(SAMPLE_PAGE).unwrap();
        assert_eq!(fragments[1].headline, None);
        assert_eq!(
            fragments[1].link,
            "https://finance.yahoo.com/news/no-headline.html"
        );
    }

    #[test]
    fn test_absolute_links_are_left_alone() {
        let fragments = parse_article_fragments(SAMPLE_PAGE).unwrap();
        assert_eq!(fragments[2].link, "https://example.com/piece");
        assert_eq!(fragments[2].byline, "");
    }

    #[test]
    fn test_empty_document_parses_to_no_fragments() {
        let fragments = parse_article_fragments("").unwrap();
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_absolutize_link() {
        assert_eq!(
            absolutize_link("/news/a.html"),
            "https://finance.yahoo.com/news/a.html"
        );
        assert_eq!(absolutize_link("https://example.com/b"), "https://example.com/b");
    }
}
