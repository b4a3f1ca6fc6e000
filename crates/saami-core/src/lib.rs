pub mod codec;
pub mod dictionary;
pub mod markup;
pub mod matching;
pub mod report;
pub mod similarity;

pub use dictionary::{DictionaryParser, remove_repeats};
pub use matching::{DialectInput, DialectResult, MatchingEngine, PosCount, ThresholdResult};
pub use report::Report;
pub use similarity::similarity;
