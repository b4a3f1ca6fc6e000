use std::fmt;

use saami_types::Language;

use crate::matching::{DialectResult, ThresholdResult};

const SEPARATOR_WIDTH: usize = 80;
const MISSING: &str = "???";

/// Plain text rendering of a matching run
pub struct Report<'a> {
    results: &'a [ThresholdResult],
}

impl<'a> Report<'a> {
    pub fn new(results: &'a [ThresholdResult]) -> Self {
        Self { results }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in self.results {
            write!(f, "{result}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ThresholdResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        for (index, dialect) in self.dialects.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write_dialect(f, dialect, self.threshold)?;
        }

        Ok(())
    }
}

fn write_dialect(f: &mut fmt::Formatter<'_>, dialect: &DialectResult, threshold: f64) -> fmt::Result {
    writeln!(f, "New {} words matched:", dialect.name)?;
    writeln!(f)?;

    for record in &dialect.new_matches {
        writeln!(
            f,
            "{}/{} ({}) - {}",
            record.word,
            record.translation(dialect.comparison).unwrap_or(MISSING),
            record.pos,
            record.translation(Language::Eng).unwrap_or(MISSING)
        )?;
    }

    writeln!(f)?;
    writeln!(
        f,
        "{} words matched ({:.2}%, {} new) for {} at {:.1}% threshold",
        dialect.matched_count(),
        dialect.matched_percent(),
        dialect.new_count(),
        dialect.name,
        threshold * 100.0
    )?;
    writeln!(f, "Parts of speech:")?;
    writeln!(f)?;

    for pos_count in &dialect.pos_counts {
        writeln!(
            f,
            "{}: {} ({:.2}%)",
            pos_count.pos,
            pos_count.count,
            dialect.pos_percent(pos_count)
        )?;
    }

    writeln!(f)
}
