//! Multi-threshold loanword matching.
//!
//! Every headword is compared against its own translation. Thresholds are
//! run strictest first; a dialect remembers which entries it has already
//! reported, so each threshold's "new" list only holds entries that did not
//! match at any stricter threshold.

use saami_types::{Language, PartOfSpeech, Record};

use crate::similarity::similarity;

/// One dialect's word list and the language its headwords are compared against
#[derive(Debug, Clone, Copy)]
pub struct DialectInput<'a> {
    pub name: &'a str,
    pub records: &'a [Record],
    pub comparison: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosCount {
    pub pos: PartOfSpeech,
    pub count: usize,
}

/// One dialect at one threshold
#[derive(Debug, Clone, PartialEq)]
pub struct DialectResult {
    pub name: String,
    pub comparison: Language,
    /// Entries in the dialect's word list
    pub total: usize,
    /// Headwords matched at this threshold, including ones matched before
    pub matched: Vec<String>,
    /// Entries matched here for the first time, in word list order
    pub new_matches: Vec<Record>,
    /// Matched entries per part of speech, in order of first appearance
    pub pos_counts: Vec<PosCount>,
}

impl DialectResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn new_count(&self) -> usize {
        self.new_matches.len()
    }

    /// Share of the word list matched, 0 for an empty list
    pub fn matched_percent(&self) -> f64 {
        percent(self.matched_count(), self.total)
    }

    /// Share of the matched entries with this part of speech
    pub fn pos_percent(&self, pos_count: &PosCount) -> f64 {
        percent(pos_count.count, self.matched_count())
    }

    fn tally(&mut self, pos: PartOfSpeech) {
        match self.pos_counts.iter_mut().find(|c| c.pos == pos) {
            Some(existing) => existing.count += 1,
            None => self.pos_counts.push(PosCount { pos, count: 1 }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdResult {
    pub threshold: f64,
    pub dialects: Vec<DialectResult>,
}

/// `part / whole` as a percentage; 0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Entries already reported for one dialect during a run
#[derive(Debug, Default)]
struct MatchHistory {
    matches: Vec<Record>,
}

impl MatchHistory {
    fn contains(&self, record: &Record) -> bool {
        self.matches.iter().any(|m| m.same_headword(record))
    }

    /// Remember `record`; false if an entry with the same headword was
    /// already reported
    fn insert(&mut self, record: &Record) -> bool {
        if self.contains(record) {
            return false;
        }
        self.matches.push(record.clone());
        true
    }
}

/// Runs thresholds over a fixed set of dialects, carrying the
/// "matches so far" state from one threshold to the next
pub struct MatchingEngine<'a> {
    dialects: Vec<DialectInput<'a>>,
    history: Vec<MatchHistory>,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(dialects: Vec<DialectInput<'a>>) -> Self {
        let history = dialects.iter().map(|_| MatchHistory::default()).collect();
        Self { dialects, history }
    }

    /// Run every threshold in the order given
    pub fn run(&mut self, thresholds: &[f64]) -> Vec<ThresholdResult> {
        thresholds
            .iter()
            .map(|&threshold| self.run_threshold(threshold))
            .collect()
    }

    pub fn run_threshold(&mut self, threshold: f64) -> ThresholdResult {
        tracing::info!("--Checking for matches at {:.1}% threshold--", threshold * 100.0);

        let dialects = self
            .dialects
            .iter()
            .zip(self.history.iter_mut())
            .map(|(dialect, history)| match_dialect(dialect, history, threshold))
            .collect();

        ThresholdResult {
            threshold,
            dialects,
        }
    }

    /// Entries reported so far for the dialect at `index`
    pub fn matches_so_far(&self, index: usize) -> &[Record] {
        self.history
            .get(index)
            .map(|h| h.matches.as_slice())
            .unwrap_or(&[])
    }
}

fn match_dialect(
    dialect: &DialectInput<'_>,
    history: &mut MatchHistory,
    threshold: f64,
) -> DialectResult {
    let mut result = DialectResult {
        name: dialect.name.to_string(),
        comparison: dialect.comparison,
        total: dialect.records.len(),
        matched: Vec::new(),
        new_matches: Vec::new(),
        pos_counts: Vec::new(),
    };

    for record in dialect.records {
        if record.pos == PartOfSpeech::ProperNoun {
            continue;
        }

        // No translation is never a match, even at threshold 0
        let Some(translation) = record.translation(dialect.comparison) else {
            continue;
        };
        if similarity(Some(&record.word), Some(translation)) < threshold {
            continue;
        }

        result.matched.push(record.word.clone());
        if history.insert(record) {
            result.new_matches.push(record.clone());
        }
        result.tally(record.pos);
    }

    tracing::debug!(
        "{}: {} matched, {} new at {threshold}",
        result.name,
        result.matched_count(),
        result.new_count()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swedish(word: &str, pos: PartOfSpeech, translation: &str) -> Record {
        Record::new(word)
            .with_pos(pos)
            .with_translation(Language::Swe, translation)
    }

    fn pite(records: &[Record]) -> DialectInput<'_> {
        DialectInput {
            name: "Pite Saami",
            records,
            comparison: Language::Swe,
        }
    }

    #[test]
    fn loanword_matches_only_at_relaxed_thresholds() {
        let records = vec![swedish("bussa", PartOfSpeech::Noun, "buss")];
        let mut engine = MatchingEngine::new(vec![pite(&records)]);

        let strict = engine.run_threshold(0.95);
        let relaxed = engine.run_threshold(0.7);

        assert_eq!(strict.dialects[0].matched_count(), 0);
        assert_eq!(relaxed.dialects[0].matched, vec!["bussa".to_string()]);
        assert_eq!(relaxed.dialects[0].new_matches, records);
    }

    #[test]
    fn entries_are_new_once_but_matched_at_every_threshold() {
        let records = vec![
            swedish("buss", PartOfSpeech::Noun, "buss"),
            swedish("bussa", PartOfSpeech::Noun, "buss"),
        ];
        let mut engine = MatchingEngine::new(vec![pite(&records)]);

        let results = engine.run(&[1.0, 0.8, 0.5]);

        let matched: Vec<usize> = results.iter().map(|r| r.dialects[0].matched_count()).collect();
        let new: Vec<Vec<&str>> = results
            .iter()
            .map(|r| r.dialects[0].new_matches.iter().map(|m| m.word.as_str()).collect())
            .collect();

        assert_eq!(matched, vec![1, 2, 2]);
        assert_eq!(new, vec![vec!["buss"], vec!["bussa"], vec![]]);
        assert_eq!(engine.matches_so_far(0).len(), 2);
    }

    #[test]
    fn matches_so_far_never_shrinks_and_reports_each_headword_once() {
        let records = vec![
            swedish("kaffa", PartOfSpeech::Noun, "kaffe"),
            swedish("bussa", PartOfSpeech::Noun, "buss"),
            swedish("tjoarvve", PartOfSpeech::Noun, "horn"),
            swedish("bussa", PartOfSpeech::Verb, "bussa"),
            swedish("ja", PartOfSpeech::Conjunction, "och"),
        ];
        let mut engine = MatchingEngine::new(vec![pite(&records)]);

        let mut sizes = Vec::new();
        let mut reported = Vec::new();
        for threshold in [1.0, 0.95, 0.9, 0.8, 0.7, 0.6, 0.5, 0.0] {
            let result = engine.run_threshold(threshold);
            reported.extend(result.dialects[0].new_matches.iter().map(|r| r.word.clone()));
            sizes.push(engine.matches_so_far(0).len());
        }

        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        let mut unique = reported.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), reported.len());
    }

    #[test]
    fn duplicate_headword_is_new_only_on_first_sighting() {
        // Second "bussa" matches exactly, first only at 0.8
        let records = vec![
            swedish("bussa", PartOfSpeech::Noun, "buss"),
            swedish("bussa", PartOfSpeech::Verb, "bussa"),
        ];
        let mut engine = MatchingEngine::new(vec![pite(&records)]);

        let exact = engine.run_threshold(1.0);
        let relaxed = engine.run_threshold(0.8);

        assert_eq!(exact.dialects[0].new_matches[0].pos, PartOfSpeech::Verb);
        assert_eq!(relaxed.dialects[0].matched_count(), 2);
        assert!(relaxed.dialects[0].new_matches.is_empty());
    }

    #[test]
    fn proper_nouns_never_match() {
        let records = vec![swedish("Jokkmokk", PartOfSpeech::ProperNoun, "Jokkmokk")];
        let mut engine = MatchingEngine::new(vec![pite(&records)]);

        for result in engine.run(&[1.0, 0.5, 0.0]) {
            assert_eq!(result.dialects[0].matched_count(), 0);
            assert!(result.dialects[0].new_matches.is_empty());
        }
    }

    #[test]
    fn missing_translation_never_matches() {
        let records = vec![Record::new("bussa").with_translation(Language::Nor, "buss")];
        let mut engine = MatchingEngine::new(vec![pite(&records)]);

        // Pite compares against Swedish, which this entry lacks
        assert_eq!(engine.run_threshold(0.0).dialects[0].matched_count(), 0);
    }

    #[test]
    fn untranslated_entries_stay_out_of_tallies_at_any_threshold() {
        let records = vec![
            Record::new("guolle").with_pos(PartOfSpeech::Noun),
            swedish("bussa", PartOfSpeech::Noun, "buss"),
        ];
        let mut engine = MatchingEngine::new(vec![pite(&records)]);

        for result in engine.run(&[0.0, -1.0]) {
            let dialect = &result.dialects[0];
            assert_eq!(dialect.matched, vec!["bussa".to_string()]);
            assert!(dialect.new_matches.iter().all(|r| r.word == "bussa"));
            assert_eq!(dialect.pos_counts, vec![PosCount { pos: PartOfSpeech::Noun, count: 1 }]);
        }
        assert_eq!(engine.matches_so_far(0).len(), 1);
    }

    #[test]
    fn dialects_use_their_own_comparison_language() {
        let pite_records = vec![swedish("bussa", PartOfSpeech::Noun, "buss")];
        let lule_records = vec![Record::new("biehtár").with_translation(Language::Nor, "pietar")];
        let mut engine = MatchingEngine::new(vec![
            pite(&pite_records),
            DialectInput {
                name: "Lule Saami",
                records: &lule_records,
                comparison: Language::Nor,
            },
        ]);

        let result = engine.run_threshold(0.5);

        assert_eq!(result.dialects[0].matched_count(), 1);
        assert_eq!(result.dialects[1].matched_count(), 1);
        assert_eq!(result.dialects[1].comparison, Language::Nor);
    }

    #[test]
    fn tallies_parts_of_speech_in_first_seen_order() {
        let records = vec![
            swedish("a", PartOfSpeech::Verb, "a"),
            swedish("b", PartOfSpeech::Noun, "b"),
            swedish("c", PartOfSpeech::Verb, "c"),
            swedish("d", PartOfSpeech::Verb, "x"),
        ];
        let mut engine = MatchingEngine::new(vec![pite(&records)]);

        let result = engine.run_threshold(1.0);
        let dialect = &result.dialects[0];

        assert_eq!(
            dialect.pos_counts,
            vec![
                PosCount {
                    pos: PartOfSpeech::Verb,
                    count: 2
                },
                PosCount {
                    pos: PartOfSpeech::Noun,
                    count: 1
                },
            ]
        );
        assert_eq!(dialect.matched_percent(), 75.0);
        assert!((dialect.pos_percent(&dialect.pos_counts[0]) - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_word_list_reports_zero_percent() {
        let mut engine = MatchingEngine::new(vec![pite(&[])]);

        let result = engine.run_threshold(0.5);

        assert_eq!(result.dialects[0].matched_percent(), 0.0);
        assert_eq!(percent(3, 0), 0.0);
    }
}
