//! Lenient tag/text event stream over scraped HTML.
//!
//! Dictionary pages are not well-formed XML: end tags go missing, `<br>` is
//! never closed and entities come from the HTML5 table. The reader is
//! configured to tolerate all of that and to keep going past anything it
//! cannot tokenize.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::{BytesStart, BytesText, Event};
use unicode_normalization::UnicodeNormalization;

/// Receives markup events in document order
pub trait MarkupHandler {
    /// `name` is lowercased, attribute keys too
    fn start_tag(&mut self, name: &str, attributes: &[(String, String)]);

    /// Unescaped, NFC-normalized character data, whitespace untouched
    fn text(&mut self, text: &str);

    fn end_tag(&mut self, name: &str);
}

/// Feed a whole document to `handler`
pub fn drive<H: MarkupHandler + ?Sized>(markup: &str, handler: &mut H) {
    let markup = escape_stray_angles(markup);
    let mut reader = Reader::from_str(&markup);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.expand_empty_elements = true;
    config.check_comments = false;

    let mut last_error_at = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let (name, attributes) = open_tag(&e);
                handler.start_tag(&name, &attributes);
            }
            Ok(Event::End(e)) => {
                handler.end_tag(&tag_name(e.name().as_ref()));
            }
            Ok(Event::Text(e)) => {
                handler.text(&text_content(&e));
            }
            Ok(Event::CData(e)) => {
                handler.text(&normalize(&String::from_utf8_lossy(&e)));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                let position = reader.buffer_position();
                if last_error_at == Some(position) {
                    tracing::warn!("Markup reader stuck at byte {position}, stopping: {e}");
                    break;
                }
                tracing::warn!("Skipping unreadable markup at byte {position}: {e}");
                last_error_at = Some(position);
            }
        }
    }
}

/// Escape every `<` that cannot open a tag, so `a < b` stays text.
///
/// A tag starts with `<` followed by a letter, `/`, `!` or `?`.
pub fn escape_stray_angles(markup: &str) -> Cow<'_, str> {
    let opens_tag = |rest: &str| {
        rest.chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
    };

    let stray = markup
        .match_indices('<')
        .any(|(at, _)| !opens_tag(&markup[at + 1..]));
    if !stray {
        return Cow::Borrowed(markup);
    }

    let mut escaped = String::with_capacity(markup.len() + 8);
    let mut rest = markup;
    while let Some(at) = rest.find('<') {
        escaped.push_str(&rest[..at]);
        rest = &rest[at + 1..];
        escaped.push_str(if opens_tag(rest) { "<" } else { "&lt;" });
    }
    escaped.push_str(rest);

    Cow::Owned(escaped)
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn open_tag(e: &BytesStart<'_>) -> (String, Vec<(String, String)>) {
    let name = tag_name(e.name().as_ref());
    let attributes = e
        .html_attributes()
        .filter_map(Result::ok)
        .map(|attr| {
            let key = tag_name(attr.key.as_ref());
            let value = attr
                .unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
            (key, value)
        })
        .collect();

    (name, attributes)
}

fn text_content(e: &BytesText<'_>) -> String {
    match e.unescape_with(resolve_html5_entity) {
        Ok(text) => normalize(&text),
        // A stray `&` is common in scraped pages; keep the raw text
        Err(_) => normalize(&String::from_utf8_lossy(e)),
    }
}

fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Whether `attributes` has `key` with exactly `value`
pub fn has_attribute(attributes: &[(String, String)], key: &str, value: &str) -> bool {
    attributes.iter().any(|(k, v)| k == key && v == value)
}
