use saami_config::pite::{PiteConfig, TranslationLabel};
use saami_core::DictionaryParser;
use saami_core::markup::{self, MarkupHandler, has_attribute};
use saami_types::{Language, PartOfSpeech, Record};

const HEADWORD_LINE: usize = 2;
const POS_LINE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    /// Inside an entry block; `lines` counts non-blank text items so far
    InEntry { lines: usize },
}

/// The previous line was a language label, so this one is its translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AwaitingField {
    language: Language,
    strip_brackets: bool,
}

impl From<&TranslationLabel> for AwaitingField {
    fn from(label: &TranslationLabel) -> Self {
        Self {
            language: label.language,
            strip_brackets: label.strip_brackets,
        }
    }
}

/// Reads the Pite Saami word list, one `<p class="menu1">` block per entry.
///
/// Inside a block the 2nd text line is the headword and the 3rd its part of
/// speech. A line reading `Engl.`, `Swed.` or `Norw.` makes the next line a
/// translation. That label carries over block boundaries, as the source
/// markup sometimes closes a block between a label and its text.
pub struct PiteWordlistReader {
    config: PiteConfig,
    state: State,
    awaiting: Option<AwaitingField>,
    records: Vec<Record>,
}

impl PiteWordlistReader {
    pub fn new(config: PiteConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            awaiting: None,
            records: Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.state = State::Idle;
        self.awaiting = None;
        self.records.clear();
    }

    fn part_of_speech(&self, raw: &str) -> PartOfSpeech {
        let token = raw.trim().trim_matches(|c| c == '(' || c == ')');

        if token.starts_with(self.config.proper_noun_prefix.as_str()) {
            return PartOfSpeech::ProperNoun;
        }

        let abbreviation = token.split(')').next().unwrap_or_default();
        self.config
            .parts_of_speech
            .get(abbreviation)
            .copied()
            .unwrap_or(PartOfSpeech::Other)
    }

    fn capture(&mut self, field: AwaitingField, line: &str) {
        let Some(record) = self.records.last_mut() else {
            return;
        };

        let mut text = line;
        if field.strip_brackets {
            text = text.split('[').next().unwrap_or_default();
        }
        let text = text.split('(').next().unwrap_or_default().trim();

        record.translations.insert(field.language, text.to_string());
    }
}

impl MarkupHandler for PiteWordlistReader {
    fn start_tag(&mut self, name: &str, attributes: &[(String, String)]) {
        if name == self.config.entry_tag && has_attribute(attributes, "class", &self.config.entry_class) {
            self.state = State::InEntry { lines: 0 };
        }
    }

    fn text(&mut self, text: &str) {
        let State::InEntry { lines } = &mut self.state else {
            return;
        };

        let line = text.trim();
        if line.is_empty() {
            return;
        }

        *lines += 1;
        let line_number = *lines;

        match line_number {
            HEADWORD_LINE => self.records.push(Record::new(line)),
            POS_LINE => {
                let pos = self.part_of_speech(line);
                if let Some(record) = self.records.last_mut() {
                    record.pos = pos;
                }
            }
            _ => {}
        }

        if let Some(field) = self.awaiting.take() {
            self.capture(field, line);
        }
        self.awaiting = self.config.label(line).map(AwaitingField::from);
    }

    fn end_tag(&mut self, name: &str) {
        if name == self.config.entry_tag {
            self.state = State::Idle;
        }
    }
}

impl DictionaryParser for PiteWordlistReader {
    fn source_name(&self) -> &str {
        "Pite Saami word list"
    }

    fn parse(&mut self, markup: &str) -> Vec<Record> {
        self.reset();
        markup::drive(markup, self);

        // The page ends with a colophon block that parses like an entry
        if let Some(trailing) = self.records.pop() {
            tracing::debug!("Dropping trailing entry {}", trailing.word);
        }

        tracing::info!("Parsed {} entries from the {}", self.records.len(), self.source_name());
        std::mem::take(&mut self.records)
    }
}
