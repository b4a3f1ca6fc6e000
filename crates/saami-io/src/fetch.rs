use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

/// Downloads dictionary pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Body of the page at `url`, decoded to text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },
}

/// Substitute `value` for `{}` in `template`, escaped as a single URL path
/// segment so `/`, `?` and `#` stay part of it
pub fn page_url(template: &str, value: &str) -> Result<String, FetchError> {
    let raw = template.replace("{}", &escape_path_segment(value)?);
    let url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;
    Ok(url.to_string())
}

/// Percent-encode `value` the way `Url` encodes a pushed path segment
pub fn escape_path_segment(value: &str) -> Result<String, FetchError> {
    // `Url` drops dot segments instead of encoding them
    if matches!(value, "." | "..") {
        return Ok(value.replace('.', "%2E"));
    }

    let invalid = |reason: String| FetchError::InvalidUrl {
        url: value.to_string(),
        reason,
    };

    let mut scratch = Url::parse("http://localhost/").map_err(|e| invalid(e.to_string()))?;
    scratch
        .path_segments_mut()
        .map_err(|_| invalid("URL cannot hold path segments".to_string()))?
        .pop_if_empty()
        .push(value);

    let path = scratch.path();
    Ok(path.strip_prefix('/').unwrap_or(path).to_string())
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
