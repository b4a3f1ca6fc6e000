use saami_types::Record;

/// Turns one dictionary source's markup into word list entries
pub trait DictionaryParser {
    /// Human readable name of the source, used in log output
    fn source_name(&self) -> &str;

    /// Parse a complete document. Entries come back in document order;
    /// malformed entries are dropped, never reported as errors.
    fn parse(&mut self, markup: &str) -> Vec<Record>;
}

/// Drop repeated items, keeping the first occurrence of each in order
pub fn remove_repeats<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}
