mod fetch;
mod files;

pub use fetch::{FetchError, HttpFetcher, PageFetcher, escape_path_segment, page_url};
pub use files::{FileError, open_report, read_source, read_wordlist, write_wordlist};
