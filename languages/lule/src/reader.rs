use saami_config::lule::LuleConfig;
use saami_core::DictionaryParser;
use saami_core::markup::{self, MarkupHandler};
use saami_io::{FetchError, PageFetcher, page_url};
use saami_types::Record;

const ROW_TAG: &str = "tr";
const CELL_TAG: &str = "td";
const MARKER_TAG: &str = "span";

const HEADWORD_CELL: usize = 1;
const TRANSLATION_CELL: usize = 2;

/// Cell of an entry row the reader is in. `markers` counts the spans opened
/// in it; only text in its first span is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    /// Before the row's first cell
    Start,
    Headword { markers: usize },
    Translation { markers: usize },
    /// Any cell after the translation
    Other,
}

impl Cell {
    /// The kind of the `index`th cell, counting from 1
    fn nth(index: usize) -> Self {
        match index {
            HEADWORD_CELL => Cell::Headword { markers: 0 },
            TRANSLATION_CELL => Cell::Translation { markers: 0 },
            _ => Cell::Other,
        }
    }

    fn markers_mut(&mut self) -> Option<&mut usize> {
        match self {
            Cell::Headword { markers } | Cell::Translation { markers } => Some(markers),
            Cell::Start | Cell::Other => None,
        }
    }
}

/// What a text item contributes to the row it appears in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellText<'a> {
    Headword(&'a str),
    Translation(&'a str),
    /// Numbered senses put the number in its own span, ahead of the
    /// translation
    SenseNumber,
    Ignored,
}

fn read_cell_text<'a>(cell: Cell, text: &'a str, false_positive_marker: &str) -> CellText<'a> {
    if text.trim().is_empty() {
        return CellText::Ignored;
    }

    match cell {
        Cell::Headword { markers: 1 } => text
            .split_whitespace()
            .next()
            .map_or(CellText::Ignored, CellText::Headword),
        Cell::Translation { markers: 1 } if text == false_positive_marker => CellText::SenseNumber,
        Cell::Translation { markers: 1 } => CellText::Translation(first_translation(text)),
        _ => CellText::Ignored,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Idle,
    /// Inside a dictionary row, `cells` opened so far
    InRow { record: Record, cells: usize, cell: Cell },
}

/// Reads the Lule Saami → Norwegian dictionary, one page per letter.
///
/// Each `normalRow`/`alternateRow` table row is an entry: the first word of
/// the first cell's span is the headword, the second cell's span holds the
/// translation.
pub struct LuleDictReader {
    config: LuleConfig,
    state: State,
    records: Vec<Record>,
}

impl LuleDictReader {
    pub fn new(config: LuleConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            records: Vec::new(),
        }
    }

    /// Parse one page, adding its entries to those already read
    pub fn feed(&mut self, page: &str) {
        markup::drive(page, self);
        // A row left open at the end of a page would otherwise swallow the
        // first cells of the next one
        self.finish_row();
    }

    /// Fetch and parse every letter's page
    pub async fn read<F: PageFetcher + ?Sized>(&mut self, fetcher: &F) -> Result<Vec<Record>, FetchError> {
        self.records.clear();
        self.state = State::Idle;

        let letters: Vec<String> = self.config.letters().collect();
        for letter in letters {
            tracing::info!("Reading Lule Saami words: {letter}");
            let url = page_url(&self.config.url_template, &letter)?;
            let page = fetcher.fetch(&url).await?;
            self.feed(&page);
        }

        tracing::info!("Read {} entries from the {}", self.records.len(), self.source_name());
        Ok(std::mem::take(&mut self.records))
    }

    fn is_entry_row(&self, attributes: &[(String, String)]) -> bool {
        attributes
            .iter()
            .any(|(key, value)| key == "class" && self.config.row_classes.contains(value))
    }

    fn finish_row(&mut self) {
        if let State::InRow { record, .. } = std::mem::replace(&mut self.state, State::Idle) {
            if record.word.is_empty() {
                tracing::debug!("Discarding row without a headword");
            } else {
                self.records.push(record);
            }
        }
    }
}

/// Cut a translation cell at the first `,`, `;` or `(`
fn first_translation(text: &str) -> &str {
    let end = text.find([',', ';', '(']).unwrap_or(text.len());
    text[..end].trim()
}

impl MarkupHandler for LuleDictReader {
    fn start_tag(&mut self, name: &str, attributes: &[(String, String)]) {
        if name == ROW_TAG && self.is_entry_row(attributes) {
            self.finish_row();
            self.state = State::InRow {
                record: Record::new(""),
                cells: 0,
                cell: Cell::Start,
            };
            return;
        }

        if let State::InRow { cells, cell, .. } = &mut self.state {
            match name {
                CELL_TAG => {
                    *cells += 1;
                    *cell = Cell::nth(*cells);
                }
                MARKER_TAG => {
                    if let Some(markers) = cell.markers_mut() {
                        *markers += 1;
                    }
                }
                _ => {}
            }
        }
    }

    fn text(&mut self, text: &str) {
        let State::InRow { record, cell, .. } = &mut self.state else {
            return;
        };

        match read_cell_text(*cell, text, &self.config.false_positive_marker) {
            CellText::Headword(word) => record.word = word.to_string(),
            CellText::Translation(translation) => {
                record
                    .translations
                    .insert(self.config.translation_language, translation.to_string());
            }
            CellText::SenseNumber => {
                // The next span holds the translation
                if let Some(markers) = cell.markers_mut() {
                    *markers -= 1;
                }
            }
            CellText::Ignored => {}
        }
    }

    fn end_tag(&mut self, name: &str) {
        match name {
            ROW_TAG => self.finish_row(),
            CELL_TAG => {
                if let State::InRow { cell, .. } = &mut self.state {
                    if let Some(markers) = cell.markers_mut() {
                        *markers = 0;
                    }
                }
            }
            _ => {}
        }
    }
}

impl DictionaryParser for LuleDictReader {
    fn source_name(&self) -> &str {
        "Lule Saami dictionary"
    }

    fn parse(&mut self, markup: &str) -> Vec<Record> {
        self.records.clear();
        self.state = State::Idle;
        self.feed(markup);
        std::mem::take(&mut self.records)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use saami_types::Language;

    use super::*;

    const PAGE_B: &str = r#"<html><body><table>
<tr class="header"><td><span>Ord</span></td><td><span>Oversettelse</span></td></tr>
<tr class="normalRow">
  <td><span>bussa</span> <span>s</span></td>
  <td><span>buss, rutebil</span></td>
</tr>
<tr class="alternateRow">
  <td><span>biehtár adj</span></td>
  <td><span>1</span><span>pietar; pedant (nedsettende)</span></td>
</tr>
<tr class="normalRow">
  <td></td>
  <td><span>ingenting</span></td>
</tr>
</table></body></html>"#;

    const PAGE_K: &str = r#"<table>
<tr class="normalRow"><td><span>kaffa</span></td><td><span>kaffe (drikk)</span></td></tr>
</table>"#;

    fn parse(markup: &str) -> Vec<Record> {
        LuleDictReader::new(LuleConfig::default()).parse(markup)
    }

    #[test]
    fn reads_rows_into_entries() {
        let records = parse(PAGE_B);

        assert_eq!(
            records,
            vec![
                Record::new("bussa").with_translation(Language::Nor, "buss"),
                Record::new("biehtár").with_translation(Language::Nor, "pietar"),
            ]
        );
    }

    #[test]
    fn sense_number_is_not_a_translation() {
        let records = parse(PAGE_B);

        assert_eq!(records[1].translation(Language::Nor), Some("pietar"));
    }

    #[test]
    fn rows_without_headword_are_discarded() {
        let records = parse(PAGE_B);

        assert!(records.iter().all(|r| !r.word.is_empty()));
        assert!(!records.iter().any(|r| r.translation(Language::Nor) == Some("ingenting")));
    }

    #[test]
    fn translations_are_cut_at_first_separator() {
        assert_eq!(first_translation("buss, rutebil"), "buss");
        assert_eq!(first_translation("hus; bolig"), "hus");
        assert_eq!(first_translation("gå (til fots), vandre"), "gå");
        assert_eq!(first_translation(" kaffe "), "kaffe");
    }

    #[test]
    fn cells_are_named_by_position() {
        assert_eq!(Cell::nth(1), Cell::Headword { markers: 0 });
        assert_eq!(Cell::nth(2), Cell::Translation { markers: 0 });
        assert_eq!(Cell::nth(3), Cell::Other);
    }

    #[test]
    fn sense_number_only_counts_in_the_translation_cell() {
        let translation = Cell::Translation { markers: 1 };
        let headword = Cell::Headword { markers: 1 };

        assert_eq!(read_cell_text(translation, "1", "1"), CellText::SenseNumber);
        assert_eq!(read_cell_text(translation, " 1 ", "1"), CellText::Translation("1"));
        assert_eq!(read_cell_text(translation, "2", "1"), CellText::Translation("2"));
        assert_eq!(read_cell_text(headword, "1", "1"), CellText::Headword("1"));
    }

    #[test]
    fn text_outside_the_first_span_is_ignored() {
        assert_eq!(read_cell_text(Cell::Headword { markers: 0 }, "bussa", "1"), CellText::Ignored);
        assert_eq!(read_cell_text(Cell::Headword { markers: 2 }, "s", "1"), CellText::Ignored);
        assert_eq!(read_cell_text(Cell::Translation { markers: 1 }, "  ", "1"), CellText::Ignored);
        assert_eq!(read_cell_text(Cell::Other, "merknad", "1"), CellText::Ignored);
        assert_eq!(read_cell_text(Cell::Start, "bussa", "1"), CellText::Ignored);
        assert_eq!(
            read_cell_text(Cell::Headword { markers: 1 }, "biehtár adj", "1"),
            CellText::Headword("biehtár")
        );
    }

    #[test]
    fn two_sense_numbers_in_a_row_still_reach_the_translation() {
        let records = parse(
            r#"<tr class="normalRow"><td><span>vuoddo</span></td><td><span>1</span><span>1</span><span>grunn</span></td></tr>"#,
        );

        assert_eq!(records[0].translation(Language::Nor), Some("grunn"));
    }

    #[test]
    fn only_the_first_span_of_a_cell_counts() {
        let records = parse(
            r#"<tr class="normalRow"><td><span>guolle</span><span>fisk</span></td><td><span>fisk</span><span>fangst</span></td></tr>"#,
        );

        assert_eq!(records, vec![Record::new("guolle").with_translation(Language::Nor, "fisk")]);
    }

    #[test]
    fn fed_pages_accumulate() {
        let mut reader = LuleDictReader::new(LuleConfig::default());

        reader.feed(PAGE_B);
        reader.feed(PAGE_K);
        let records = std::mem::take(&mut reader.records);

        let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["bussa", "biehtár", "kaffa"]);
    }

    struct FakeFetcher {
        pages: HashMap<String, &'static str>,
    }

    #[async_trait::async_trait]
    impl PageFetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.pages
                .get(url)
                .map(|page| page.to_string())
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    fn config(alphabet: &str) -> LuleConfig {
        LuleConfig {
            url_template: "http://dict.test/{}.html".to_string(),
            alphabet: alphabet.to_string(),
            ..LuleConfig::default()
        }
    }

    #[tokio::test]
    async fn read_fetches_every_letter_in_order() {
        let fetcher = FakeFetcher {
            pages: HashMap::from([
                ("http://dict.test/b.html".to_string(), PAGE_B),
                ("http://dict.test/k.html".to_string(), PAGE_K),
            ]),
        };
        let mut reader = LuleDictReader::new(config("bk"));

        let records = reader.read(&fetcher).await.unwrap();

        let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["bussa", "biehtár", "kaffa"]);
    }

    #[tokio::test]
    async fn read_stops_on_fetch_failure() {
        let fetcher = FakeFetcher {
            pages: HashMap::from([("http://dict.test/b.html".to_string(), PAGE_B)]),
        };
        let mut reader = LuleDictReader::new(config("bx"));

        let err = reader.read(&fetcher).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn letters_are_escaped_into_the_url() {
        let fetcher = FakeFetcher {
            pages: HashMap::from([("http://dict.test/%C3%A1.html".to_string(), PAGE_K)]),
        };
        let mut reader = LuleDictReader::new(config("á"));

        let records = reader.read(&fetcher).await.unwrap();

        assert_eq!(records.len(), 1);
    }
}
