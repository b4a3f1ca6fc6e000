mod reader;

pub use reader::PiteWordlistReader;
