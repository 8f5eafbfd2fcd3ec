use thiserror::Error;

/// Errors raised while fetching or reading a news page.
///
/// These never cross the service boundary: the news service logs them and
/// hands callers an empty list instead.
#[derive(Error, Debug)]
pub enum NewsError {
    /// The page request failed or returned a non-success status.
    #[error("News page request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A selector the parser relies on did not compile.
    #[error("Selector parse failed: {0}")]
    Selector(String),
}
