mod extractor;

pub use extractor::{NorthDictExtractor, NorthEntry};
