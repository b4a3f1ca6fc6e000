use regex::Regex;
use saami_config::north::NorthConfig;
use saami_core::{DictionaryParser, remove_repeats};
use saami_types::{Language, Record};

/// One pattern match: headword, keyword reference and gloss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NorthEntry {
    pub word: String,
    pub keyword: String,
    pub gloss: String,
}

/// Pulls entries out of the North Saami dictionary export with a regex.
///
/// The export is too irregular for the markup reader; a match spans two
/// lines, the headword line and the gloss line after it.
pub struct NorthDictExtractor {
    pattern: Regex,
    gloss_language: Language,
}

impl NorthDictExtractor {
    pub fn new(config: &NorthConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&config.pattern)?,
            gloss_language: config.gloss_language,
        })
    }

    /// Every match in document order, repeats removed
    pub fn extract(&self, source: &str) -> Vec<NorthEntry> {
        let found = self.pattern.captures_iter(source).filter_map(|caps| {
            Some(NorthEntry {
                word: caps.get(1)?.as_str().to_string(),
                keyword: caps.get(2)?.as_str().to_string(),
                gloss: caps.get(3)?.as_str().to_string(),
            })
        });

        remove_repeats(found)
    }
}

impl DictionaryParser for NorthDictExtractor {
    fn source_name(&self) -> &str {
        "North Saami dictionary"
    }

    fn parse(&mut self, markup: &str) -> Vec<Record> {
        let records: Vec<Record> = self
            .extract(markup)
            .into_iter()
            .filter(|entry| !entry.word.is_empty())
            .map(|entry| Record::new(entry.word).with_translation(self.gloss_language, entry.gloss))
            .collect();

        tracing::info!("Extracted {} entries from the {}", records.len(), self.source_name());
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "<d>
<e><l><i>bussa</i> s <small>→ </small><kref>buss</kref></l>
<t><span>bus</span></t></e>
<e><l><i>kaffa</i> s <small>→ </small><kref>kaffe</kref></l>
<t><span>coffee</span></t></e>
<e><l><i>bussa</i> s <small>→ </small><kref>buss</kref></l>
<t><span>bus</span></t></e>
<e><l><i>guolle</i> s</l>
<t><span>fish</span></t></e>
</d>";

    fn extractor() -> NorthDictExtractor {
        NorthDictExtractor::new(&NorthConfig::default()).unwrap()
    }

    #[test]
    fn extracts_unique_entries_in_order() {
        let entries = extractor().extract(EXPORT);

        assert_eq!(
            entries,
            vec![
                NorthEntry {
                    word: "bussa".to_string(),
                    keyword: "buss".to_string(),
                    gloss: "bus".to_string(),
                },
                NorthEntry {
                    word: "kaffa".to_string(),
                    keyword: "kaffe".to_string(),
                    gloss: "coffee".to_string(),
                },
            ]
        );
    }

    #[test]
    fn entries_become_records_with_gloss() {
        let records = extractor().parse(EXPORT);

        assert_eq!(
            records,
            vec![
                Record::new("bussa").with_translation(Language::Eng, "bus"),
                Record::new("kaffa").with_translation(Language::Eng, "coffee"),
            ]
        );
    }

    #[test]
    fn gloss_language_is_configurable() {
        let config = NorthConfig {
            gloss_language: Language::Nor,
            ..NorthConfig::default()
        };
        let records = NorthDictExtractor::new(&config).unwrap().parse(EXPORT);

        assert_eq!(records[0].translation(Language::Nor), Some("bus"));
        assert_eq!(records[0].translation(Language::Eng), None);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let config = NorthConfig {
            pattern: "<i>(.*</i>".to_string(),
            ..NorthConfig::default()
        };

        assert!(NorthDictExtractor::new(&config).is_err());
    }
}
