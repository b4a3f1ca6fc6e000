use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use saami_config::Config;
use saami_config::matching::{DialectConfig, DialectSource};
use saami_core::{DialectInput, DictionaryParser, MatchingEngine, Report};
use saami_io::{PageFetcher, open_report, read_source, read_wordlist, write_wordlist};
use saami_lang_lule::LuleDictReader;
use saami_lang_north::NorthDictExtractor;
use saami_lang_pite::PiteWordlistReader;
use saami_translator::{Enricher, enrich_records};
use saami_types::Record;

/// A dialect's word list together with the cache it lives in
struct WordList<'a> {
    dialect: &'a DialectConfig,
    cache: PathBuf,
    records: Vec<Record>,
}

/// Load every configured word list, match and write the report.
///
/// Returns the path the report ended up at.
pub async fn run(
    config: &Config,
    fetcher: &dyn PageFetcher,
    enricher: Option<&dyn Enricher>,
    output: Option<&Path>,
) -> anyhow::Result<PathBuf> {
    let mut word_lists = Vec::new();
    for dialect in &config.matching.dialects {
        if let Some(word_list) = load_word_list(config, dialect, fetcher).await? {
            word_lists.push(word_list);
        }
    }

    if let Some(enricher) = enricher {
        for word_list in &mut word_lists {
            let report = enrich_records(&mut word_list.records, enricher).await;
            if report.found > 0 {
                write_wordlist(&word_list.cache, &word_list.records)?;
            }
        }
    }

    for word_list in &word_lists {
        tracing::info!(
            "There are {} words in the {} dictionary",
            word_list.records.len(),
            word_list.dialect.name
        );
    }

    if !config.matching.is_descending() {
        tracing::warn!(
            "Thresholds {:?} are not in descending order; new matches will be reported out of order",
            config.matching.thresholds
        );
    }

    let inputs = word_lists
        .iter()
        .map(|word_list| {
            let comparison = word_list.dialect.comparison_for(&word_list.records);
            tracing::info!("Comparing {} headwords against {}", word_list.dialect.name, comparison.code());
            DialectInput {
                name: &word_list.dialect.name,
                records: &word_list.records,
                comparison,
            }
        })
        .collect();
    let results = MatchingEngine::new(inputs).run(&config.matching.thresholds);

    let (file, path) = open_report(output, Path::new(&config.default_output))?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", Report::new(&results))
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(path)
}

async fn load_word_list<'a>(
    config: &Config,
    dialect: &'a DialectConfig,
    fetcher: &dyn PageFetcher,
) -> anyhow::Result<Option<WordList<'a>>> {
    let records = match dialect.source {
        DialectSource::Pite => load_pite(config)?,
        DialectSource::Lule => Some(load_lule(config, fetcher).await?),
        DialectSource::North => load_north(config)?,
    };

    let Some(records) = records else {
        tracing::warn!("No word list for {}, skipping it", dialect.name);
        return Ok(None);
    };

    Ok(Some(WordList {
        dialect,
        cache: PathBuf::from(cache_path(config, dialect.source)),
        records,
    }))
}

fn cache_path(config: &Config, source: DialectSource) -> &str {
    match source {
        DialectSource::Pite => &config.pite.cache_path,
        DialectSource::Lule => &config.lule.cache_path,
        DialectSource::North => &config.north.cache_path,
    }
}

/// The Pite page is small and local, so it is re-parsed whenever present
fn load_pite(config: &Config) -> anyhow::Result<Option<Vec<Record>>> {
    let source = Path::new(&config.pite.source_path);
    let cache = Path::new(&config.pite.cache_path);

    if source.exists() {
        let markup = read_source(source)?;
        let records = PiteWordlistReader::new(config.pite.clone()).parse(&markup);
        write_wordlist(cache, &records)?;
        return Ok(Some(records));
    }

    load_cache(cache)
}

async fn load_lule(config: &Config, fetcher: &dyn PageFetcher) -> anyhow::Result<Vec<Record>> {
    let cache = Path::new(&config.lule.cache_path);
    if let Some(records) = load_cache(cache)? {
        return Ok(records);
    }

    let records = LuleDictReader::new(config.lule.clone())
        .read(fetcher)
        .await
        .context("Failed to download the Lule Saami dictionary")?;
    write_wordlist(cache, &records)?;
    Ok(records)
}

fn load_north(config: &Config) -> anyhow::Result<Option<Vec<Record>>> {
    let cache = Path::new(&config.north.cache_path);
    if let Some(records) = load_cache(cache)? {
        return Ok(Some(records));
    }

    let source = Path::new(&config.north.source_path);
    if !source.exists() {
        return Ok(None);
    }

    let export = read_source(source)?;
    let mut extractor = NorthDictExtractor::new(&config.north).context("Invalid North Saami pattern")?;
    let records = extractor.parse(&export);
    write_wordlist(cache, &records)?;
    Ok(Some(records))
}

fn load_cache(cache: &Path) -> anyhow::Result<Option<Vec<Record>>> {
    if !cache.exists() {
        return Ok(None);
    }

    let records = read_wordlist(cache)?;
    tracing::info!("Loaded {} entries from {}", records.len(), cache.display());
    Ok(Some(records))
}
