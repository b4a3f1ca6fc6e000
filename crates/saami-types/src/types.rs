use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages a Saami headword can be translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Swe,
    Nor,
    Eng,
}

impl Language {
    /// Cache column order
    pub const ALL: [Language; 3] = [Language::Swe, Language::Nor, Language::Eng];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Swe => "swe",
            Language::Nor => "nor",
            Language::Eng => "eng",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "swe" => Some(Language::Swe),
            "nor" => Some(Language::Nor),
            "eng" => Some(Language::Eng),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Swe => "Swedish",
            Language::Nor => "Norwegian",
            Language::Eng => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalized part of speech, labelled in English
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Conjunction,
    Adjective,
    Adverb,
    Numeral,
    Pronoun,
    #[serde(rename = "Proper noun")]
    ProperNoun,
    Other,
    /// Source gave no part of speech
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Conjunction => "Conjunction",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Numeral => "Numeral",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::ProperNoun => "Proper noun",
            PartOfSpeech::Other => "Other",
            PartOfSpeech::Unknown => "",
        }
    }

    /// Parse a label written by [`PartOfSpeech::as_str`].
    /// Unrecognized labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "" => PartOfSpeech::Unknown,
            "Noun" => PartOfSpeech::Noun,
            "Verb" => PartOfSpeech::Verb,
            "Conjunction" => PartOfSpeech::Conjunction,
            "Adjective" => PartOfSpeech::Adjective,
            "Adverb" => PartOfSpeech::Adverb,
            "Numeral" => PartOfSpeech::Numeral,
            "Pronoun" => PartOfSpeech::Pronoun,
            "Proper noun" => PartOfSpeech::ProperNoun,
            _ => PartOfSpeech::Other,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dictionary entry
///
/// `==` compares every field. Entry identity in the word lists is the
/// headword alone, see [`Record::same_headword`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub word: String,
    #[serde(default)]
    pub pos: PartOfSpeech,
    /// A key with an empty value means a translation was looked for
    #[serde(default)]
    pub translations: BTreeMap<Language, String>,
}

impl Record {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }

    pub fn with_pos(mut self, pos: PartOfSpeech) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_translation(mut self, language: Language, text: impl Into<String>) -> Self {
        self.translations.insert(language, text.into());
        self
    }

    pub fn translation(&self, language: Language) -> Option<&str> {
        self.translations.get(&language).map(String::as_str)
    }

    /// Two entries are the same word list entry when their headwords match,
    /// whatever their part of speech or translations
    pub fn same_headword(&self, other: &Record) -> bool {
        self.word == other.word
    }
}

pub fn same_headword(a: &Record, b: &Record) -> bool {
    a.same_headword(b)
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\"{}\" ({})", self.word, self.pos)?;
        for (language, text) in &self.translations {
            if !text.is_empty() {
                writeln!(f, "{language}: {text}")?;
            }
        }
        Ok(())
    }
}
