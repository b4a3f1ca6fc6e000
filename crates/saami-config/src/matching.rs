use std::env;

use saami_types::{Language, Record};
use serde::{Deserialize, Serialize};

/// Word list a dialect's records come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectSource {
    Pite,
    Lule,
    North,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectConfig {
    /// Shown in the report, e.g. "Pite Saami"
    pub name: String,
    pub source: DialectSource,
    /// Headwords are compared against their translation into this language
    pub comparison: Language,
    /// Used instead of `comparison` when the word list carries it
    #[serde(default)]
    pub preferred_comparison: Option<Language>,
}

impl DialectConfig {
    /// The language a loaded word list is actually compared against
    pub fn comparison_for(&self, records: &[Record]) -> Language {
        match self.preferred_comparison {
            Some(preferred)
                if records
                    .iter()
                    .any(|record| record.translation(preferred).is_some_and(|t| !t.is_empty())) =>
            {
                preferred
            }
            _ => self.comparison,
        }
    }
}

fn default_thresholds() -> Vec<f64> {
    vec![1.0, 0.95, 0.9, 0.8, 0.7, 0.6, 0.5]
}

fn default_dialects() -> Vec<DialectConfig> {
    vec![
        DialectConfig {
            name: "Pite Saami".to_string(),
            source: DialectSource::Pite,
            comparison: Language::Swe,
            preferred_comparison: None,
        },
        DialectConfig {
            name: "Lule Saami".to_string(),
            source: DialectSource::Lule,
            comparison: Language::Nor,
            preferred_comparison: None,
        },
        DialectConfig {
            name: "North Saami".to_string(),
            source: DialectSource::North,
            // Older caches keep the gloss under `nor`
            comparison: Language::Eng,
            preferred_comparison: Some(Language::Nor),
        },
    ]
}

/// Parse a comma separated threshold list, e.g. `1.0,0.9,0.75`
pub fn parse_thresholds(raw: &str) -> Option<Vec<f64>> {
    let thresholds: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;

    if thresholds.is_empty() {
        None
    } else {
        Some(thresholds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Strictest first
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f64>,
    #[serde(default = "default_dialects")]
    pub dialects: Vec<DialectConfig>,
}

impl MatchingConfig {
    pub fn new() -> Self {
        let thresholds = match env::var("MATCH_THRESHOLDS") {
            Ok(raw) => parse_thresholds(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring unparsable MATCH_THRESHOLDS={raw}");
                default_thresholds()
            }),
            Err(_) => default_thresholds(),
        };

        Self {
            thresholds,
            dialects: default_dialects(),
        }
    }

    pub fn is_descending(&self) -> bool {
        self.thresholds.windows(2).all(|w| w[0] >= w[1])
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
            dialects: default_dialects(),
        }
    }
}
