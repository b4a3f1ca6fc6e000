use std::env;

use saami_types::Language;
use serde::{Deserialize, Serialize};

fn default_cache_path() -> String {
    "lule_saami_wordlist.txt".to_string()
}

fn default_url_template() -> String {
    "http://gtweb.uit.no/webdict/ak/smj2nob/{}_smj2nob.html".to_string()
}

fn default_alphabet() -> String {
    "aábcdefghijklmnoprstuvwæå".to_string()
}

fn default_row_classes() -> Vec<String> {
    vec!["normalRow".to_string(), "alternateRow".to_string()]
}

fn default_false_positive_marker() -> String {
    "1".to_string()
}

fn default_translation_language() -> Language {
    Language::Nor
}

/// Lule Saami → Norwegian dictionary, one page per letter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LuleConfig {
    #[serde(default = "default_cache_path")]
    pub cache_path: String,
    /// `{}` is replaced with the URL-escaped letter
    #[serde(default = "default_url_template")]
    pub url_template: String,
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    #[serde(default = "default_row_classes")]
    pub row_classes: Vec<String>,
    /// Sense number rendered like a marker in the translation cell
    #[serde(default = "default_false_positive_marker")]
    pub false_positive_marker: String,
    #[serde(default = "default_translation_language")]
    pub translation_language: Language,
}

impl LuleConfig {
    pub fn new() -> Self {
        let cache_path = env::var("LULE_CACHE").unwrap_or_else(|_| default_cache_path());
        let url_template =
            env::var("LULE_URL_TEMPLATE").unwrap_or_else(|_| default_url_template());

        Self {
            cache_path,
            url_template,
            ..Self::default()
        }
    }

    pub fn letters(&self) -> impl Iterator<Item = String> + '_ {
        self.alphabet.chars().map(String::from)
    }
}

impl Default for LuleConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            url_template: default_url_template(),
            alphabet: default_alphabet(),
            row_classes: default_row_classes(),
            false_positive_marker: default_false_positive_marker(),
            translation_language: default_translation_language(),
        }
    }
}
