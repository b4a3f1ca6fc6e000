use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::StatusCode;
use saami_io::page_url;
use serde::Deserialize;

use crate::{EnrichError, Enricher};

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static ANNOTATION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid markup tag regex pattern"))
}

fn annotation_pattern() -> &'static Regex {
    ANNOTATION_PATTERN
        .get_or_init(|| Regex::new(r"[\(\[].*?[\)\]]").expect("Invalid annotation regex pattern"))
}

/// Reduce a dictionary definition to a short gloss.
///
/// Drops markup and bracketed notes, keeps the first comma-separated sense
/// and strips a leading article. `None` if nothing is left.
pub fn clean_gloss(definition: &str) -> Option<String> {
    let text = tag_pattern().replace_all(definition, "");
    let text = annotation_pattern().replace_all(&text, "");
    let first = text.split(',').next().unwrap_or_default().trim();

    let gloss = first
        .strip_prefix("a ")
        .or_else(|| first.strip_prefix("an "))
        .unwrap_or(first)
        .trim();

    (!gloss.is_empty()).then(|| gloss.to_string())
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    language: String,
    #[serde(default)]
    definitions: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(default)]
    definition: String,
}

/// Glosses from the Wiktionary REST definition endpoint
#[derive(Clone)]
pub struct WiktionaryEnricher {
    client: reqwest::Client,
    api_url: String,
    languages: Vec<String>,
}

impl WiktionaryEnricher {
    /// `api_url` carries a `{}` placeholder for the word; `languages` are the
    /// Wiktionary section names tried in order
    pub fn new(api_url: String, languages: Vec<String>, timeout: Duration) -> Result<Self, EnrichError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            languages,
        })
    }

    fn url_for(&self, word: &str) -> Result<String, EnrichError> {
        page_url(&self.api_url, word).map_err(|e| EnrichError::ApiError(e.to_string()))
    }

    fn pick_definition(&self, usages: &HashMap<String, Vec<Usage>>) -> Option<String> {
        self.languages.iter().find_map(|language| {
            usages
                .values()
                .flatten()
                .filter(|usage| usage.language == *language)
                .flat_map(|usage| usage.definitions.iter())
                .find_map(|sense| clean_gloss(&sense.definition))
        })
    }
}

#[async_trait]
impl Enricher for WiktionaryEnricher {
    async fn english_gloss(&self, norwegian: &str) -> Result<Option<String>, EnrichError> {
        let url = self.url_for(norwegian)?;
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(EnrichError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(EnrichError::ApiError(format!("HTTP {}", response.status())));
        }

        let usages: HashMap<String, Vec<Usage>> = response
            .json()
            .await
            .map_err(|e| EnrichError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(self.pick_definition(&usages))
    }

    fn name(&self) -> &str {
        "Wiktionary"
    }
}
