//! Word list cache format.
//!
//! One entry per line, five `;`-separated fields:
//!
//! ```text
//! word;part of speech;swedish;norwegian;english
//! ```
//!
//! Nothing is escaped, so field values must not contain `;` or a newline.
//! An empty translation field means the entry has no translation for that
//! language.

use std::io::{self, BufRead, Write};

use saami_types::{Language, PartOfSpeech, Record};

pub const SEPARATOR: &str = ";";

const FIELDS: usize = 5;

/// Encode one entry, without the trailing newline
pub fn encode_record(record: &Record) -> String {
    let mut fields = Vec::with_capacity(FIELDS);
    fields.push(record.word.as_str());
    fields.push(record.pos.as_str());
    for language in Language::ALL {
        fields.push(record.translation(language).unwrap_or(""));
    }
    fields.join(SEPARATOR)
}

pub fn encode(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&encode_record(record));
        out.push('\n');
    }
    out
}

/// Decode one line. Missing trailing fields count as empty; extra
/// separators end up in the English field.
pub fn decode_line(line: &str) -> Record {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.splitn(FIELDS, SEPARATOR);

    let mut record = Record::new(fields.next().unwrap_or(""));
    record.pos = PartOfSpeech::from_label(fields.next().unwrap_or(""));

    for (language, text) in Language::ALL.into_iter().zip(fields) {
        if !text.is_empty() {
            record.translations.insert(language, text.to_string());
        }
    }

    record
}

/// Decode a whole cache file, skipping blank lines
pub fn decode(text: &str) -> Vec<Record> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(decode_line)
        .collect()
}

pub fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", encode_record(record))?;
    }
    writer.flush()
}

pub fn read_records<R: BufRead>(reader: R) -> io::Result<Vec<Record>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            records.push(decode_line(&line));
        }
    }
    Ok(records)
}
