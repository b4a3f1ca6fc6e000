mod types;

pub use types::{Language, PartOfSpeech, Record, same_headword};
