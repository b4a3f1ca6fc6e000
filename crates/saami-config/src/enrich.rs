use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_api_url() -> String {
    "https://en.wiktionary.org/api/rest_v1/page/definition/{}".to_string()
}

fn default_languages() -> Vec<String> {
    // Wiktionary splits Norwegian in two; Nynorsk is tried first
    vec![
        "Norwegian Nynorsk".to_string(),
        "Norwegian Bokmål".to_string(),
    ]
}

/// English glosses looked up from Norwegian translations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// `{}` is replaced with the escaped word
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

impl EnrichConfig {
    pub fn new() -> Self {
        let enabled = env::var("ENRICH_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        Self {
            enabled,
            ..Self::default()
        }
    }
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            languages: default_languages(),
        }
    }
}
