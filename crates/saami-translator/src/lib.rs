mod wiktionary;

pub use wiktionary::{WiktionaryEnricher, clean_gloss};

use saami_types::{Language, Record};

/// Looks up English glosses for Norwegian words
#[async_trait::async_trait]
pub trait Enricher: Send + Sync {
    /// English gloss for `norwegian`, `None` if the provider has none
    async fn english_gloss(&self, norwegian: &str) -> Result<Option<String>, EnrichError>;

    /// Provider name for log output
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichReport {
    pub checked: usize,
    pub found: usize,
}

/// Fill in missing English translations from the Norwegian ones.
///
/// Lookup failures are logged and skipped; the entry just stays without an
/// English gloss.
pub async fn enrich_records<E: Enricher + ?Sized>(records: &mut [Record], enricher: &E) -> EnrichReport {
    let mut report = EnrichReport::default();
    let total = records.len();

    for record in records.iter_mut() {
        if record.translation(Language::Eng).is_some_and(|eng| !eng.is_empty()) {
            continue;
        }
        let Some(norwegian) = record.translation(Language::Nor).filter(|nor| !nor.is_empty()) else {
            continue;
        };

        report.checked += 1;
        match enricher.english_gloss(norwegian).await {
            Ok(Some(gloss)) => {
                record.translations.insert(Language::Eng, gloss);
                report.found += 1;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("{} lookup failed for {}: {e}", enricher.name(), record.word);
            }
        }

        if report.checked % 100 == 0 {
            tracing::info!(
                "Checking word {}/{} ({} found)",
                report.checked,
                total,
                report.found
            );
        }
    }

    tracing::info!(
        "{}: {} English glosses found for {} words",
        enricher.name(),
        report.found,
        report.checked
    );

    report
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FakeEnricher {
        glosses: HashMap<&'static str, &'static str>,
    }

    #[async_trait::async_trait]
    impl Enricher for FakeEnricher {
        async fn english_gloss(&self, norwegian: &str) -> Result<Option<String>, EnrichError> {
            if norwegian == "feil" {
                return Err(EnrichError::RateLimitExceeded);
            }
            Ok(self.glosses.get(norwegian).map(|g| g.to_string()))
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn fake() -> FakeEnricher {
        FakeEnricher {
            glosses: HashMap::from([("buss", "bus"), ("fisk", "fish")]),
        }
    }

    #[tokio::test]
    async fn fills_missing_english_glosses() {
        let mut records = vec![
            Record::new("bussa").with_translation(Language::Nor, "buss"),
            Record::new("guolle").with_translation(Language::Nor, "fisk"),
            Record::new("ukjent").with_translation(Language::Nor, "ukjent"),
        ];

        let report = enrich_records(&mut records, &fake()).await;

        assert_eq!(report, EnrichReport { checked: 3, found: 2 });
        assert_eq!(records[0].translation(Language::Eng), Some("bus"));
        assert_eq!(records[1].translation(Language::Eng), Some("fish"));
        assert_eq!(records[2].translation(Language::Eng), None);
    }

    #[tokio::test]
    async fn failures_are_skipped() {
        let mut records = vec![
            Record::new("x").with_translation(Language::Nor, "feil"),
            Record::new("bussa").with_translation(Language::Nor, "buss"),
        ];

        let report = enrich_records(&mut records, &fake()).await;

        assert_eq!(report.found, 1);
        assert_eq!(records[0].translation(Language::Eng), None);
        assert_eq!(records[1].translation(Language::Eng), Some("bus"));
    }

    #[tokio::test]
    async fn existing_glosses_and_missing_norwegian_are_left_alone() {
        let mut records = vec![
            Record::new("bussa")
                .with_translation(Language::Nor, "buss")
                .with_translation(Language::Eng, "coach"),
            Record::new("bussa").with_translation(Language::Swe, "buss"),
        ];

        let report = enrich_records(&mut records, &fake()).await;

        assert_eq!(report.checked, 0);
        assert_eq!(records[0].translation(Language::Eng), Some("coach"));
        assert_eq!(records[1].translation(Language::Eng), None);
    }
}
