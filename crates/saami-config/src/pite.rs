use std::collections::BTreeMap;
use std::env;

use saami_types::{Language, PartOfSpeech};
use serde::{Deserialize, Serialize};

fn default_source_path() -> String {
    "pite_wordlist.html".to_string()
}

fn default_cache_path() -> String {
    "pite_saami_wordlist.txt".to_string()
}

fn default_entry_tag() -> String {
    "p".to_string()
}

fn default_entry_class() -> String {
    "menu1".to_string()
}

fn default_proper_noun_prefix() -> String {
    "ege".to_string()
}

/// Marks the line after it as a translation into `language`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationLabel {
    pub label: String,
    pub language: Language,
    /// Also drop everything from the first `[`
    #[serde(default)]
    pub strip_brackets: bool,
}

fn default_labels() -> Vec<TranslationLabel> {
    vec![
        TranslationLabel {
            label: "Engl.".to_string(),
            language: Language::Eng,
            strip_brackets: false,
        },
        TranslationLabel {
            label: "Swed.".to_string(),
            language: Language::Swe,
            strip_brackets: false,
        },
        TranslationLabel {
            label: "Norw.".to_string(),
            language: Language::Nor,
            strip_brackets: true,
        },
    ]
}

/// Swedish dictionary abbreviations
pub fn swedish_parts_of_speech() -> BTreeMap<String, PartOfSpeech> {
    [
        ("subst", PartOfSpeech::Noun),
        ("verb", PartOfSpeech::Verb),
        ("konj", PartOfSpeech::Conjunction),
        ("adj", PartOfSpeech::Adjective),
        // attr/pred marking is inconsistent in the source, so all collapse to Adjective
        ("adj:attr", PartOfSpeech::Adjective),
        ("adj:pred", PartOfSpeech::Adjective),
        ("adj:attr/pred", PartOfSpeech::Adjective),
        ("adv", PartOfSpeech::Adverb),
        ("num", PartOfSpeech::Numeral),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Norwegian dictionary abbreviations
pub fn norwegian_parts_of_speech() -> BTreeMap<String, PartOfSpeech> {
    [
        ("subst.", PartOfSpeech::Noun),
        ("egennavn", PartOfSpeech::ProperNoun),
        ("verb", PartOfSpeech::Verb),
        ("påpek. pron.", PartOfSpeech::Pronoun),
        ("pron.", PartOfSpeech::Pronoun),
        ("adj.", PartOfSpeech::Adjective),
        ("num.", PartOfSpeech::Numeral),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Pite Saami word list (one `<p class="menu1">` block per entry)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PiteConfig {
    #[serde(default = "default_source_path")]
    pub source_path: String,
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    #[serde(default = "default_entry_tag")]
    pub entry_tag: String,
    #[serde(default = "default_entry_class")]
    pub entry_class: String,
    /// First three letters of the proper noun marker
    #[serde(default = "default_proper_noun_prefix")]
    pub proper_noun_prefix: String,
    #[serde(default = "swedish_parts_of_speech")]
    pub parts_of_speech: BTreeMap<String, PartOfSpeech>,
    #[serde(default = "default_labels")]
    pub labels: Vec<TranslationLabel>,
}

impl PiteConfig {
    pub fn new() -> Self {
        let source_path = env::var("PITE_SOURCE").unwrap_or_else(|_| default_source_path());
        let cache_path = env::var("PITE_CACHE").unwrap_or_else(|_| default_cache_path());

        Self {
            source_path,
            cache_path,
            ..Self::default()
        }
    }

    pub fn label(&self, text: &str) -> Option<&TranslationLabel> {
        self.labels.iter().find(|l| l.label == text)
    }
}

impl Default for PiteConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            cache_path: default_cache_path(),
            entry_tag: default_entry_tag(),
            entry_class: default_entry_class(),
            proper_noun_prefix: default_proper_noun_prefix(),
            parts_of_speech: swedish_parts_of_speech(),
            labels: default_labels(),
        }
    }
}
