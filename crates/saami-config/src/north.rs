use std::env;

use saami_types::Language;
use serde::{Deserialize, Serialize};

fn default_source_path() -> String {
    "north_saami_dict.xml".to_string()
}

fn default_cache_path() -> String {
    "north_saami_wordlist.txt".to_string()
}

fn default_pattern() -> String {
    r"<i>(.*)</i>.*→ </small><kref>(\S*)</kref>.*\n.*<span>(\S.*)</span>".to_string()
}

fn default_gloss_language() -> Language {
    Language::Eng
}

/// North Saami dictionary export, scanned line-wise with a regex
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NorthConfig {
    #[serde(default = "default_source_path")]
    pub source_path: String,
    #[serde(default = "default_cache_path")]
    pub cache_path: String,
    /// Captures word, keyword reference and gloss, in that order
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Language the captured gloss is stored under
    #[serde(default = "default_gloss_language")]
    pub gloss_language: Language,
}

impl NorthConfig {
    pub fn new() -> Self {
        let source_path = env::var("NORTH_SOURCE").unwrap_or_else(|_| default_source_path());
        let cache_path = env::var("NORTH_CACHE").unwrap_or_else(|_| default_cache_path());

        Self {
            source_path,
            cache_path,
            ..Self::default()
        }
    }
}

impl Default for NorthConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            cache_path: default_cache_path(),
            pattern: default_pattern(),
            gloss_language: default_gloss_language(),
        }
    }
}
