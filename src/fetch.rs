use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tokio::time::Duration;
use tracing::warn;

/// One unit of input content to fetch and scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(u) => write!(f, "{}", u),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Per-source failure. Absorbed at the task boundary; never aborts siblings.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

pub fn build_client(timeout_secs: u64) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (compatible; ruwords/1.0; +https://github.com/adysec/ruwords)")
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// Convert parsed name/value pairs into a reqwest header map. Pairs that do
/// not form valid header names/values are warned about and dropped.
pub fn header_map(pairs: &[(String, String)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (k, v) in pairs {
        if let (Ok(k), Ok(v)) = (
            HeaderName::from_bytes(k.as_bytes()),
            HeaderValue::from_str(v),
        ) {
            headers.insert(k, v);
        } else {
            warn!(header = %k, "invalid header dropped");
        }
    }
    headers
}

/// Fetch one source as text. Single attempt, no caching.
/// URLs honor the courtesy delay before the request; local reads do not.
pub async fn fetch(
    client: &reqwest::Client,
    source: &Source,
    headers: &HeaderMap,
    delay: f64,
) -> Result<String, FetchError> {
    match source {
        Source::Url(url) => {
            if delay > 0.0 {
                tokio::time::sleep(Duration::from_secs_f64(delay)).await;
            }
            let text = client
                .get(url)
                .headers(headers.clone())
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            Ok(text)
        }
        // local file reads are fast synchronous operations
        Source::File(path) => Ok(std::fs::read_to_string(path)?),
    }
}
