mod reader;

pub use reader::LuleDictReader;
